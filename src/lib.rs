//! Body Mass Index evaluation
//!
//! Weight and height are entered as text, validated field by field, and turned
//! into a rounded BMI value with its health category.

pub mod domain;
pub use domain::{
    BmiForm, BmiResult, Category, ColorChoice, Config, ConfigError, Field, FormState,
    InvalidReason, OutputFormat, Validation, ValidationErrors, evaluate, normalize, validate,
};
