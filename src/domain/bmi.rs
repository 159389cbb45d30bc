//! BMI calculation and categorization.

use serde::{Deserialize, Serialize};

/// BMI category at the standard WHO thresholds.
///
/// The trained model only carries one-hot columns for `Normal weight` and
/// `Obese`; the other two categories encode as all-zero. That collapse is
/// part of the persisted feature schema and is preserved here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Human-readable label, matching the strings baked into the model's
    /// column names.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// The one-hot column this category activates, if any.
    ///
    /// `Underweight` and `Overweight` have no column of their own.
    #[must_use]
    pub fn column(self) -> Option<&'static str> {
        match self {
            Self::Normal => Some("bmi_category_Normal weight"),
            Self::Obese => Some("bmi_category_Obese"),
            Self::Underweight | Self::Overweight => None,
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Compute BMI (rounded to one decimal) and its category.
///
/// Inputs are pre-validated by the caller; this function has no error paths.
#[must_use]
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> (f64, BmiCategory) {
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    let bmi = (bmi * 10.0).round() / 10.0;

    let category = if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    };

    (bmi, category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_rounded_to_one_decimal() {
        // 70 / 1.65^2 = 25.711... -> 25.7
        let (bmi, category) = calculate_bmi(165.0, 70.0);
        assert!((bmi - 25.7).abs() < f64::EPSILON);
        assert_eq!(category, BmiCategory::Overweight);
    }

    #[test]
    fn test_category_thresholds() {
        assert_eq!(calculate_bmi(170.0, 50.0).1, BmiCategory::Underweight); // 17.3
        assert_eq!(calculate_bmi(170.0, 65.0).1, BmiCategory::Normal); // 22.5
        assert_eq!(calculate_bmi(170.0, 80.0).1, BmiCategory::Overweight); // 27.7
        assert_eq!(calculate_bmi(170.0, 95.0).1, BmiCategory::Obese); // 32.9
    }

    #[test]
    fn test_boundary_values() {
        // Exactly 25.0 is Overweight, exactly 30.0 is Obese.
        let (bmi, category) = calculate_bmi(200.0, 100.0);
        assert!((bmi - 25.0).abs() < f64::EPSILON);
        assert_eq!(category, BmiCategory::Overweight);

        let (bmi, category) = calculate_bmi(200.0, 120.0);
        assert!((bmi - 30.0).abs() < f64::EPSILON);
        assert_eq!(category, BmiCategory::Obese);
    }

    #[test]
    fn test_collapsed_categories_have_no_column() {
        assert!(BmiCategory::Underweight.column().is_none());
        assert!(BmiCategory::Overweight.column().is_none());
        assert_eq!(
            BmiCategory::Normal.column(),
            Some("bmi_category_Normal weight")
        );
        assert_eq!(BmiCategory::Obese.column(), Some("bmi_category_Obese"));
    }
}
