use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::Serialize;
use tracing::{debug, trace};

/// Leading decimal literal, after optional whitespace.
///
/// Accepts `70`, `70.5`, `.5`, `5.`, signed values and an exponent. Anything
/// after the literal is ignored, so `"70kg"` reads as `70`.
static DECIMAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("decimal prefix pattern is valid")
});

/// One of the two inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Body weight, in kilograms.
    Weight,
    /// Height, in metres.
    Height,
}

impl Field {
    /// Lowercase name of the field, as used in messages and JSON keys.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Height => "height",
        }
    }

    /// Unit the value is entered in.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Weight => "kg",
            Self::Height => "m",
        }
    }

    /// Placeholder shown when prompting for this field, e.g. `Weight (kg)`.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Weight => "Weight (kg)",
            Self::Height => "Height (m)",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    /// Nothing but whitespace was entered.
    Missing,
    /// The text does not start with a number, or the number is not strictly
    /// positive.
    NonPositiveOrUnparseable,
}

impl InvalidReason {
    /// Stable machine-readable code for the reason.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::NonPositiveOrUnparseable => "non_positive_or_unparseable",
        }
    }

    /// The inline message shown next to `field`.
    #[must_use]
    pub fn message(self, field: Field) -> String {
        match self {
            Self::Missing => format!("Enter your {field}"),
            Self::NonPositiveOrUnparseable => format!("Invalid {field}"),
        }
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The outcome of validating a single field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Validation {
    /// The field holds a usable, strictly positive number.
    Valid(f64),
    /// The field was rejected.
    Invalid(InvalidReason),
}

impl Validation {
    /// Returns the reason if the field was rejected.
    #[must_use]
    pub const fn error(self) -> Option<InvalidReason> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(reason) => Some(reason),
        }
    }

    /// Returns the value if the field was accepted.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }
}

/// Per-field errors for a refused calculation.
///
/// At least one of the two fields carries a reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.describe())]
pub struct ValidationErrors {
    /// Error for the weight field, if any.
    pub weight: Option<InvalidReason>,
    /// Error for the height field, if any.
    pub height: Option<InvalidReason>,
}

impl ValidationErrors {
    /// Returns the error for the given field.
    #[must_use]
    pub const fn get(&self, field: Field) -> Option<InvalidReason> {
        match field {
            Field::Weight => self.weight,
            Field::Height => self.height,
        }
    }

    /// Iterates over the rejected fields in form order.
    pub fn rejected(&self) -> impl Iterator<Item = (Field, InvalidReason)> + '_ {
        [Field::Weight, Field::Height]
            .into_iter()
            .filter_map(|field| self.get(field).map(|reason| (field, reason)))
    }

    fn describe(&self) -> String {
        self.rejected()
            .map(|(field, reason)| reason.message(field))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Converts raw text into a number.
///
/// The first comma is treated as the decimal separator. Leading whitespace is
/// skipped and the longest leading decimal literal is parsed; text with no
/// leading number normalizes to `0.0`.
#[must_use]
pub fn normalize(raw: &str) -> f64 {
    let text = raw.replacen(',', ".", 1);
    let value = DECIMAL_PREFIX
        .captures(&text)
        .and_then(|captures| captures.get(1))
        .and_then(|literal| literal.as_str().parse::<f64>().ok())
        .unwrap_or(0.0);
    trace!(raw, value, "normalized input");
    value
}

/// Validates a single field's raw text.
#[must_use]
pub fn validate(raw: &str) -> Validation {
    if raw.trim().is_empty() {
        return Validation::Invalid(InvalidReason::Missing);
    }

    let value = normalize(raw);
    if !value.is_finite() || value <= 0.0 {
        return Validation::Invalid(InvalidReason::NonPositiveOrUnparseable);
    }

    Validation::Valid(value)
}

/// Validates both fields and returns `(weight, height)` if both are usable.
///
/// Both fields are always checked, so a refusal reports every problem at once.
/// A pair of individually valid values is still rejected when `weight /
/// height²` is not finite: the height if its square is zero or subnormal,
/// otherwise the weight.
///
/// # Errors
///
/// Returns [`ValidationErrors`] if either field is rejected.
pub fn validate_pair(weight: &str, height: &str) -> Result<(f64, f64), ValidationErrors> {
    let weight = validate(weight);
    let height = validate(height);

    let errors = match (weight, height) {
        (Validation::Valid(weight), Validation::Valid(height)) => {
            let squared = height * height;
            if (weight / squared).is_finite() {
                return Ok((weight, height));
            }
            if squared.is_normal() {
                ValidationErrors {
                    weight: Some(InvalidReason::NonPositiveOrUnparseable),
                    height: None,
                }
            } else {
                ValidationErrors {
                    weight: None,
                    height: Some(InvalidReason::NonPositiveOrUnparseable),
                }
            }
        }
        _ => ValidationErrors {
            weight: weight.error(),
            height: height.error(),
        },
    };

    debug!(weight = ?errors.weight, height = ?errors.height, "input rejected");
    Err(errors)
}
