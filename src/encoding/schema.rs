//! Statically enumerated feature schema.
//!
//! Every column the classifier can consume is listed here, grouped the way
//! the builder emits them. Dynamic string-formatted keys are deliberately
//! absent: the loader validates the model's declared feature order against
//! this fixed set at load time and fails fast on drift.

/// Raw binary features, encoded 0/1 straight from the survey answers.
pub const RAW_BINARY_COLUMNS: [&str; 5] = [
    "hypertension",
    "heart_disease",
    "ever_married",
    "smoking_status",
    "diabetes",
];

/// One-hot columns for the age group bucket.
pub const AGE_GROUP_COLUMNS: [&str; 3] = [
    "age_group_Middle (50-64)",
    "age_group_Older (65+)",
    "age_group_Young (<49)",
];

/// One-hot columns for the folded employment class.
pub const WORK_TYPE_COLUMNS: [&str; 4] = [
    "work_type_Employed",
    "work_type_Private",
    "work_type_Self-employed",
    "work_type_Unemployed",
];

/// One-hot columns for the BMI category.
///
/// Only two of the four categories have columns; Underweight and
/// Overweight encode as all-zero. This matches the persisted training
/// schema and must not be "fixed".
pub const BMI_CATEGORY_COLUMNS: [&str; 2] = ["bmi_category_Normal weight", "bmi_category_Obese"];

/// One-hot columns for the health risk tier. High collapses to all-zero.
pub const HEALTH_RISK_COLUMNS: [&str; 2] = ["health_risk_Low Risk", "health_risk_Moderate Risk"];

/// One-hot columns for the age-gender risk tier.
pub const AGE_GENDER_RISK_COLUMNS: [&str; 4] = [
    "age_gender_risk_High Risk",
    "age_gender_risk_Low Risk",
    "age_gender_risk_Moderate Risk",
    "age_gender_risk_Very High Risk",
];

/// One-hot columns for the stress tier.
pub const STRESS_LEVEL_COLUMNS: [&str; 2] = ["stress_level_Low Stress", "stress_level_Moderate Stress"];

/// Total number of feature columns.
pub const FEATURE_COUNT: usize = 22;

/// Every feature column, in builder emission order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "hypertension",
    "heart_disease",
    "ever_married",
    "smoking_status",
    "diabetes",
    "age_group_Middle (50-64)",
    "age_group_Older (65+)",
    "age_group_Young (<49)",
    "work_type_Employed",
    "work_type_Private",
    "work_type_Self-employed",
    "work_type_Unemployed",
    "bmi_category_Normal weight",
    "bmi_category_Obese",
    "health_risk_Low Risk",
    "health_risk_Moderate Risk",
    "age_gender_risk_High Risk",
    "age_gender_risk_Low Risk",
    "age_gender_risk_Moderate Risk",
    "age_gender_risk_Very High Risk",
    "stress_level_Low Stress",
    "stress_level_Moderate Stress",
];

/// Whether `name` is a column this schema defines.
#[must_use]
pub fn contains(name: &str) -> bool {
    FEATURE_NAMES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_partition_the_schema() {
        let grouped = RAW_BINARY_COLUMNS.len()
            + AGE_GROUP_COLUMNS.len()
            + WORK_TYPE_COLUMNS.len()
            + BMI_CATEGORY_COLUMNS.len()
            + HEALTH_RISK_COLUMNS.len()
            + AGE_GENDER_RISK_COLUMNS.len()
            + STRESS_LEVEL_COLUMNS.len();
        assert_eq!(grouped, FEATURE_COUNT);

        for name in RAW_BINARY_COLUMNS
            .iter()
            .chain(AGE_GROUP_COLUMNS.iter())
            .chain(WORK_TYPE_COLUMNS.iter())
            .chain(BMI_CATEGORY_COLUMNS.iter())
            .chain(HEALTH_RISK_COLUMNS.iter())
            .chain(AGE_GENDER_RISK_COLUMNS.iter())
            .chain(STRESS_LEVEL_COLUMNS.iter())
        {
            assert!(contains(name), "{name} missing from FEATURE_NAMES");
        }
    }

    #[test]
    fn test_no_duplicate_columns() {
        let mut names: Vec<&str> = FEATURE_NAMES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FEATURE_COUNT);
    }
}
