//! Risk bucketing rule tables.
//!
//! Every function here is pure, total over its input domain, and
//! deterministic. The label strings must reproduce the column names
//! persisted with the trained model exactly.

use serde::{Deserialize, Serialize};

use super::bmi::{calculate_bmi, BmiCategory};
use super::survey::{EmploymentClass, Gender, ResidenceType, SurveyRecord};

/// Age bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    Young,
    Middle,
    Older,
}

impl AgeGroup {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Young => "Young (<49)",
            Self::Middle => "Middle (50-64)",
            Self::Older => "Older (65+)",
        }
    }

    /// The one-hot column this group activates.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Young => "age_group_Young (<49)",
            Self::Middle => "age_group_Middle (50-64)",
            Self::Older => "age_group_Older (65+)",
        }
    }
}

/// Risk tier derived from the (age group, gender) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGenderRisk {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl AgeGenderRisk {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
            Self::VeryHigh => "Very High Risk",
        }
    }

    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Low => "age_gender_risk_Low Risk",
            Self::Moderate => "age_gender_risk_Moderate Risk",
            Self::High => "age_gender_risk_High Risk",
            Self::VeryHigh => "age_gender_risk_Very High Risk",
        }
    }
}

/// Risk tier derived from the three medical history flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthRisk {
    Low,
    Moderate,
    High,
}

impl HealthRisk {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
        }
    }

    /// The one-hot column this tier activates, if any.
    ///
    /// `High` has no column of its own; it encodes as all-zero.
    #[must_use]
    pub fn column(self) -> Option<&'static str> {
        match self {
            Self::Low => Some("health_risk_Low Risk"),
            Self::Moderate => Some("health_risk_Moderate Risk"),
            Self::High => None,
        }
    }
}

/// Stress tier derived from work, marital, residence and health inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressLevel {
    Low,
    Moderate,
}

impl StressLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Stress",
            Self::Moderate => "Moderate Stress",
        }
    }

    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Low => "stress_level_Low Stress",
            Self::Moderate => "stress_level_Moderate Stress",
        }
    }
}

/// Map age in years to its age group. Total over the validated domain.
#[must_use]
pub fn age_to_age_group(age: u32) -> AgeGroup {
    if age < 50 {
        AgeGroup::Young
    } else if age <= 64 {
        AgeGroup::Middle
    } else {
        AgeGroup::Older
    }
}

/// Lookup table over all 6 (age group, gender) combinations.
#[must_use]
pub fn age_gender_to_risk(age_group: AgeGroup, gender: Gender) -> AgeGenderRisk {
    match (age_group, gender) {
        (AgeGroup::Young, Gender::Female) => AgeGenderRisk::Low,
        (AgeGroup::Young, Gender::Male) => AgeGenderRisk::Moderate,
        (AgeGroup::Middle, Gender::Female) => AgeGenderRisk::Moderate,
        (AgeGroup::Middle, Gender::Male) => AgeGenderRisk::High,
        (AgeGroup::Older, Gender::Female) => AgeGenderRisk::High,
        (AgeGroup::Older, Gender::Male) => AgeGenderRisk::VeryHigh,
    }
}

/// Combine the three medical flags into an ordinal risk tier.
///
/// Counts the true flags: 0 is Low, 1 or 2 is Moderate, all 3 is High.
/// Defined for all 8 boolean combinations.
#[must_use]
pub fn health_risk_level(hypertension: bool, heart_disease: bool, diabetes: bool) -> HealthRisk {
    let flags = u8::from(hypertension) + u8::from(heart_disease) + u8::from(diabetes);
    match flags {
        0 => HealthRisk::Low,
        1 | 2 => HealthRisk::Moderate,
        _ => HealthRisk::High,
    }
}

/// Derive the stress tier from the four lifestyle inputs.
///
/// Additive score: employment class contributes 0 (Employed), 1 (Private,
/// Self-employed) or 2 (Unemployed); being single adds 1; urban residence
/// adds 1; health risk adds 0/1/2 for Low/Moderate/High. A total of 3 or
/// more is Moderate Stress. Defined for every combination the form can
/// produce (4 x 2 x 2 x 3).
#[must_use]
pub fn stress_level_category(
    work: EmploymentClass,
    married: bool,
    residence: ResidenceType,
    health_risk: HealthRisk,
) -> StressLevel {
    let work_score: u8 = match work {
        EmploymentClass::Employed => 0,
        EmploymentClass::Private | EmploymentClass::SelfEmployed => 1,
        EmploymentClass::Unemployed => 2,
    };
    let marital_score = u8::from(!married);
    let residence_score: u8 = match residence {
        ResidenceType::Rural => 0,
        ResidenceType::Urban => 1,
    };
    let health_score: u8 = match health_risk {
        HealthRisk::Low => 0,
        HealthRisk::Moderate => 1,
        HealthRisk::High => 2,
    };

    if work_score + marital_score + residence_score + health_score >= 3 {
        StressLevel::Moderate
    } else {
        StressLevel::Low
    }
}

/// All categorical buckets derived from one validated survey record.
///
/// Built once per submission and carried as an immutable snapshot between
/// the review and predict stages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    /// BMI rounded to one decimal
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub age_group: AgeGroup,
    pub age_gender_risk: AgeGenderRisk,
    pub health_risk: HealthRisk,
    pub employment_class: EmploymentClass,
    pub stress_level: StressLevel,
}

impl RiskProfile {
    /// Derive every bucket from a validated record.
    #[must_use]
    pub fn derive(record: &SurveyRecord) -> Self {
        let (bmi, bmi_category) = calculate_bmi(record.height_cm, record.weight_kg);
        let age_group = age_to_age_group(record.age);
        let age_gender_risk = age_gender_to_risk(age_group, record.gender);
        let health_risk =
            health_risk_level(record.hypertension, record.heart_disease, record.diabetes);
        let employment_class = record.work_type.employment_class();
        let stress_level = stress_level_category(
            employment_class,
            record.ever_married(),
            record.residence_type,
            health_risk,
        );

        Self {
            bmi,
            bmi_category,
            age_group,
            age_gender_risk,
            health_risk,
            employment_class,
            stress_level,
        }
    }
}
