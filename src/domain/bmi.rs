use tracing::debug;

use crate::domain::{
    Category,
    input::{ValidationErrors, validate_pair},
};

/// The outcome of a successful calculation.
///
/// [`evaluate`] and [`BmiForm::calculate`](crate::BmiForm::calculate) only
/// produce results with a finite, positive value. [`BmiResult::compute`] does
/// not check its arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    value: f64,
    category: Category,
}

impl BmiResult {
    /// Computes BMI from a weight in kilograms and a height in metres.
    ///
    /// The category is taken from the unrounded value; the stored value is
    /// rounded to one decimal place.
    ///
    /// ```
    /// use bmi_calculator::{BmiResult, Category};
    ///
    /// let result = BmiResult::compute(70.0, 1.75);
    /// assert_eq!(result.value(), 22.9);
    /// assert_eq!(result.category(), Category::NormalWeight);
    /// ```
    #[must_use]
    pub fn compute(weight: f64, height: f64) -> Self {
        let bmi = weight / (height * height);
        let category = Category::classify(bmi);
        debug!(weight, height, bmi, %category, "computed bmi");
        Self {
            value: round_to_tenth(bmi),
            category,
        }
    }

    /// BMI rounded to one decimal place.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The health category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Ordinal of the category; higher is more severe.
    #[must_use]
    pub const fn severity_rank(&self) -> u8 {
        self.category.severity()
    }
}

/// Validates raw weight and height text and computes the result.
///
/// # Errors
///
/// Returns [`ValidationErrors`] carrying the reason for every rejected field.
pub fn evaluate(weight: &str, height: &str) -> Result<BmiResult, ValidationErrors> {
    let (weight, height) = validate_pair(weight, height)?;
    Ok(BmiResult::compute(weight, height))
}

/// Rounds half away from zero.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::domain::input::InvalidReason;

    #[test_case("70", "1.75", 22.9, Category::NormalWeight; "normal weight")]
    #[test_case("120", "1.70", 41.5, Category::ObesityClassIII; "obesity class three")]
    #[test_case("50", "1,80", 15.4, Category::Underweight; "underweight with comma")]
    #[test_case("85", "1.75", 27.8, Category::Overweight; "overweight")]
    #[test_case("100", "1.75", 32.7, Category::ObesityClassI; "obesity class one")]
    #[test_case("115", "1.75", 37.6, Category::ObesityClassII; "obesity class two")]
    fn evaluate_valid_input(weight: &str, height: &str, value: f64, category: Category) {
        let result = evaluate(weight, height).unwrap();
        assert!((result.value() - value).abs() < 1e-9);
        assert_eq!(result.category(), category);
        assert_eq!(result.severity_rank(), category.severity());
    }

    #[test]
    fn zero_weight_produces_no_result() {
        let errors = evaluate("0", "1.75").unwrap_err();
        assert_eq!(errors.weight, Some(InvalidReason::NonPositiveOrUnparseable));
        assert_eq!(errors.height, None);
    }

    #[test_case("1", "1e-200"; "height squared underflows")]
    #[test_case("1e308", "0.5"; "quotient overflows")]
    fn non_finite_bmi_produces_no_result(weight: &str, height: &str) {
        let errors = evaluate(weight, height).unwrap_err();
        assert_eq!(errors.rejected().count(), 1);
    }

    #[test]
    fn category_uses_unrounded_value() {
        // 24.96 displays as 25.0 but is still below the overweight bound.
        let result = BmiResult::compute(24.96, 1.0);
        assert!((result.value() - 25.0).abs() < 1e-9);
        assert_eq!(result.category(), Category::NormalWeight);
    }

    #[test]
    fn exact_boundary_is_next_category() {
        let result = BmiResult::compute(25.0, 1.0);
        assert_eq!(result.category(), Category::Overweight);
    }
}
