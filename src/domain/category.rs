use std::fmt;

use serde::Serialize;

/// A BMI health category.
///
/// Variants are declared in ascending order of BMI, so the derived ordering
/// matches [`Category::severity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// BMI below 18.5.
    Underweight,
    /// BMI from 18.5 up to 25.
    NormalWeight,
    /// BMI from 25 up to 30.
    Overweight,
    /// BMI from 30 up to 35.
    #[serde(rename = "obesity_class_i")]
    ObesityClassI,
    /// BMI from 35 up to 40.
    #[serde(rename = "obesity_class_ii")]
    ObesityClassII,
    /// BMI of 40 and above.
    #[serde(rename = "obesity_class_iii")]
    ObesityClassIII,
}

impl Category {
    /// Every category, lowest BMI first.
    pub const ALL: [Self; 6] = [
        Self::Underweight,
        Self::NormalWeight,
        Self::Overweight,
        Self::ObesityClassI,
        Self::ObesityClassII,
        Self::ObesityClassIII,
    ];

    /// Classifies a BMI value.
    ///
    /// Each category covers `[lower, upper)`; the first category whose upper
    /// bound exceeds `bmi` wins. A value exactly on a bound therefore belongs
    /// to the higher category.
    ///
    /// ```
    /// use bmi_calculator::Category;
    ///
    /// assert_eq!(Category::classify(18.4), Category::Underweight);
    /// assert_eq!(Category::classify(25.0), Category::Overweight);
    /// assert_eq!(Category::classify(52.0), Category::ObesityClassIII);
    /// ```
    #[must_use]
    pub fn classify(bmi: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.upper_bound().is_none_or(|upper| bmi < upper))
            .unwrap_or(Self::ObesityClassIII)
    }

    /// Exclusive upper bound, or `None` for the open-ended top category.
    #[must_use]
    pub const fn upper_bound(self) -> Option<f64> {
        match self {
            Self::Underweight => Some(18.5),
            Self::NormalWeight => Some(25.0),
            Self::Overweight => Some(30.0),
            Self::ObesityClassI => Some(35.0),
            Self::ObesityClassII => Some(40.0),
            Self::ObesityClassIII => None,
        }
    }

    /// Inclusive lower bound, or `None` for the bottom category.
    #[must_use]
    pub const fn lower_bound(self) -> Option<f64> {
        match self {
            Self::Underweight => None,
            Self::NormalWeight => Some(18.5),
            Self::Overweight => Some(25.0),
            Self::ObesityClassI => Some(30.0),
            Self::ObesityClassII => Some(35.0),
            Self::ObesityClassIII => Some(40.0),
        }
    }

    /// Ordinal used for ordering; 0 is the lowest category.
    #[must_use]
    pub const fn severity(self) -> u8 {
        self as u8
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::ObesityClassI => "Obesity class I",
            Self::ObesityClassII => "Obesity class II",
            Self::ObesityClassIII => "Obesity class III",
        }
    }

    /// Display colour as an RGB triple.
    #[must_use]
    pub const fn color(self) -> (u8, u8, u8) {
        match self {
            Self::Underweight => (0xe6, 0x7e, 0x22),
            Self::NormalWeight => (0x2e, 0xcc, 0x71),
            Self::Overweight => (0xf1, 0xc4, 0x0f),
            Self::ObesityClassI => (0xe7, 0x4c, 0x3c),
            Self::ObesityClassII => (0xc0, 0x39, 0x2b),
            Self::ObesityClassIII => (0x8e, 0x44, 0xad),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0.0, Category::Underweight; "zero")]
    #[test_case(18.49, Category::Underweight; "just below 18.5")]
    #[test_case(18.5, Category::NormalWeight; "exactly 18.5")]
    #[test_case(24.99, Category::NormalWeight; "just below 25")]
    #[test_case(25.0, Category::Overweight; "exactly 25")]
    #[test_case(30.0, Category::ObesityClassI; "exactly 30")]
    #[test_case(34.9, Category::ObesityClassI; "just below 35")]
    #[test_case(35.0, Category::ObesityClassII; "exactly 35")]
    #[test_case(39.99, Category::ObesityClassII; "just below 40")]
    #[test_case(40.0, Category::ObesityClassIII; "exactly 40")]
    #[test_case(f64::INFINITY, Category::ObesityClassIII; "infinite")]
    fn classify_uses_exclusive_upper_bounds(bmi: f64, expected: Category) {
        assert_eq!(Category::classify(bmi), expected);
    }

    #[test]
    fn severity_is_monotonic_in_bmi() {
        let mut previous = 0;
        for step in 0..=6000 {
            let bmi = f64::from(step) / 100.0;
            let severity = Category::classify(bmi).severity();
            assert!(severity >= previous, "severity dropped at bmi {bmi}");
            previous = severity;
        }
        assert_eq!(previous, 5);
    }

    #[test]
    fn bounds_are_contiguous() {
        for pair in Category::ALL.windows(2) {
            assert_eq!(pair[0].upper_bound(), pair[1].lower_bound());
        }
    }

    #[test]
    fn severity_matches_position() {
        for (index, category) in Category::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(category.severity()), index);
        }
    }

    #[test]
    fn serialized_names() {
        assert_eq!(
            serde_json::to_value(Category::ObesityClassIII).unwrap(),
            serde_json::json!("obesity_class_iii")
        );
        assert_eq!(
            serde_json::to_value(Category::NormalWeight).unwrap(),
            serde_json::json!("normal_weight")
        );
    }

    #[test]
    fn labels() {
        assert_eq!(Category::NormalWeight.to_string(), "Normal weight");
        assert_eq!(Category::ObesityClassIII.label(), "Obesity class III");
    }
}
