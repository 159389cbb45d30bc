//! Feature vector builder.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{RiskProfile, SurveyRecord};
use crate::encoding::schema;

/// The fixed-schema feature mapping consumed by the trained classifier.
///
/// Built once per confirmed submission, read by the results stage, then
/// discarded. Keys are always exactly [`schema::FEATURE_NAMES`]; values are
/// 0/1 indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: BTreeMap<String, f64>,
}

impl FeatureVector {
    /// Encode a validated record and its derived buckets into the model's
    /// feature mapping.
    ///
    /// Each one-hot group activates at most one column; groups whose active
    /// category has no column (Underweight/Overweight BMI, High health
    /// risk) emit all zeros per the persisted training schema.
    #[must_use]
    pub fn build(record: &SurveyRecord, profile: &RiskProfile) -> Self {
        let mut values = BTreeMap::new();

        let mut set = |name: &'static str, on: bool| {
            values.insert(name.to_string(), f64::from(u8::from(on)));
        };

        set("hypertension", record.hypertension);
        set("heart_disease", record.heart_disease);
        set("ever_married", record.ever_married());
        set("smoking_status", record.smokes());
        set("diabetes", record.diabetes);

        for column in schema::AGE_GROUP_COLUMNS {
            set(column, column == profile.age_group.column());
        }
        for column in schema::WORK_TYPE_COLUMNS {
            set(column, column == profile.employment_class.column());
        }
        for column in schema::BMI_CATEGORY_COLUMNS {
            set(column, Some(column) == profile.bmi_category.column());
        }
        for column in schema::HEALTH_RISK_COLUMNS {
            set(column, Some(column) == profile.health_risk.column());
        }
        for column in schema::AGE_GENDER_RISK_COLUMNS {
            set(column, column == profile.age_gender_risk.column());
        }
        for column in schema::STRESS_LEVEL_COLUMNS {
            set(column, column == profile.stress_level.column());
        }

        debug_assert_eq!(values.len(), schema::FEATURE_COUNT);

        Self { values }
    }

    /// Value for a named column, if the schema defines it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Number of columns (always [`schema::FEATURE_COUNT`]).
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over (column, value) pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Materialize the mapping positionally in the classifier's declared
    /// feature order. Columns the mapping does not carry fill with 0.
    #[must_use]
    pub fn align(&self, feature_order: &[String]) -> Vec<f64> {
        feature_order
            .iter()
            .map(|name| self.get(name).unwrap_or(0.0))
            .collect()
    }
}
