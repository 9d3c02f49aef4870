//! Domain models for BMI evaluation.
//!
//! This module contains input normalization and validation, the BMI
//! calculation and its categories, the form state and configuration.

/// Input normalization and per-field validation.
pub mod input;
pub use input::{Field, InvalidReason, Validation, ValidationErrors, normalize, validate};

mod category;
pub use category::Category;

mod bmi;
pub use bmi::{BmiResult, evaluate};

/// Form state shared with the presentation layer.
pub mod form;
pub use form::{BmiForm, FormState};

mod config;
pub use config::{ColorChoice, Config, ConfigError, OutputFormat};
