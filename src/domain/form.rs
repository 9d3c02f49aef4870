use tracing::{debug, instrument};

use crate::domain::{
    BmiResult,
    input::{Field, InvalidReason, ValidationErrors, validate_pair},
};

/// Whether the form is currently showing a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// No result is shown; the user is entering values.
    Editing,
    /// The last calculation succeeded and its result is shown.
    ResultShown,
}

/// State of the single-screen BMI form.
///
/// Owned by the presentation layer, which calls the setters as the user types
/// and presses buttons. A result is held only while it reflects the current
/// inputs: editing either field, or resetting, discards it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BmiForm {
    weight: String,
    height: String,
    weight_error: Option<InvalidReason>,
    height_error: Option<InvalidReason>,
    result: Option<BmiResult>,
}

impl BmiForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the text of a field.
    ///
    /// Clears that field's error and any shown result. The other field's
    /// error is left alone.
    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        let text = text.into();
        match field {
            Field::Weight => {
                self.weight = text;
                self.weight_error = None;
            }
            Field::Height => {
                self.height = text;
                self.height_error = None;
            }
        }
        self.result = None;
    }

    /// Replaces the weight text. See [`BmiForm::set`].
    pub fn set_weight(&mut self, text: impl Into<String>) {
        self.set(Field::Weight, text);
    }

    /// Replaces the height text. See [`BmiForm::set`].
    pub fn set_height(&mut self, text: impl Into<String>) {
        self.set(Field::Height, text);
    }

    /// Validates both fields and, if both are valid, computes and stores the
    /// result.
    ///
    /// # Errors
    ///
    /// Returns the per-field errors if either field is invalid. The errors are
    /// also retained on the form and any previous result is cleared.
    #[instrument(level = "debug", skip(self), fields(weight = %self.weight, height = %self.height))]
    pub fn calculate(&mut self) -> Result<&BmiResult, ValidationErrors> {
        self.weight_error = None;
        self.height_error = None;
        self.result = None;

        match validate_pair(&self.weight, &self.height) {
            Ok((weight, height)) => Ok(&*self.result.insert(BmiResult::compute(weight, height))),
            Err(errors) => {
                self.weight_error = errors.weight;
                self.height_error = errors.height;
                Err(errors)
            }
        }
    }

    /// Clears both inputs, both errors and the result.
    pub fn reset(&mut self) {
        debug!("form reset");
        *self = Self::default();
    }

    /// Current text of a field.
    #[must_use]
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Weight => &self.weight,
            Field::Height => &self.height,
        }
    }

    /// Current error shown for a field.
    #[must_use]
    pub const fn error(&self, field: Field) -> Option<InvalidReason> {
        match field {
            Field::Weight => self.weight_error,
            Field::Height => self.height_error,
        }
    }

    /// The result, if one is shown.
    #[must_use]
    pub const fn result(&self) -> Option<&BmiResult> {
        self.result.as_ref()
    }

    /// Which of the two states the form is in.
    #[must_use]
    pub const fn state(&self) -> FormState {
        if self.result.is_some() {
            FormState::ResultShown
        } else {
            FormState::Editing
        }
    }
}
