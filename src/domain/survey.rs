//! Survey record types for stroke risk prediction.
//!
//! Field set and ranges follow the intake form: demographics, composite
//! medical history flags, and lifestyle answers.

use serde::{Deserialize, Serialize};

/// Gender as collected by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Marital status as collected by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    Married,
    Single,
}

/// Residence type as collected by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResidenceType {
    Rural,
    Urban,
}

/// Work type as collected by the form.
///
/// `GovernmentJob` exists only on the intake side; it folds into
/// [`EmploymentClass::Employed`] before any encoding happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkType {
    SelfEmployed,
    Unemployed,
    Private,
    GovernmentJob,
}

/// Employment class after folding, matching the model's `work_type_*`
/// one-hot columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentClass {
    Employed,
    Private,
    SelfEmployed,
    Unemployed,
}

impl WorkType {
    /// Fold the raw form answer into the class the model was trained on.
    #[must_use]
    pub fn employment_class(self) -> EmploymentClass {
        match self {
            Self::SelfEmployed => EmploymentClass::SelfEmployed,
            Self::Unemployed => EmploymentClass::Unemployed,
            Self::Private => EmploymentClass::Private,
            Self::GovernmentJob => EmploymentClass::Employed,
        }
    }
}

impl EmploymentClass {
    /// The one-hot column this class activates.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Employed => "work_type_Employed",
            Self::Private => "work_type_Private",
            Self::SelfEmployed => "work_type_Self-employed",
            Self::Unemployed => "work_type_Unemployed",
        }
    }
}

/// Smoking status, collapsed to the binary the model expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmokingStatus {
    NonSmoker,
    FormerlyOrCurrent,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}

impl std::fmt::Display for WorkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SelfEmployed => write!(f, "Self-employed"),
            Self::Unemployed => write!(f, "Unemployed"),
            Self::Private => write!(f, "Private"),
            Self::GovernmentJob => write!(f, "Government Job"),
        }
    }
}

/// Raw validated survey answers for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyRecord {
    /// Age in years (18-100 accepted)
    pub age: u32,

    pub gender: Gender,

    /// Height in cm (100-250 accepted)
    pub height_cm: f64,

    /// Weight in kg (30-200 accepted)
    pub weight_kg: f64,

    /// High blood pressure, doctor diagnosed
    pub hypertension: bool,

    /// Heart disease such as heart attack or angina
    pub heart_disease: bool,

    pub diabetes: bool,

    pub marital_status: MaritalStatus,

    pub residence_type: ResidenceType,

    pub work_type: WorkType,

    pub smoking_status: SmokingStatus,
}

impl SurveyRecord {
    /// Validate that all fields are within the ranges the form declares.
    ///
    /// Checks do not short-circuit: every violation contributes one
    /// human-readable message so the caller can display them together.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(100.0..=250.0).contains(&self.height_cm) {
            errors.push("Height must be between 100 and 250 cm.".to_string());
        }
        if !(30.0..=200.0).contains(&self.weight_kg) {
            errors.push("Weight must be between 30 and 200 kg.".to_string());
        }
        let (bmi, _) = super::bmi::calculate_bmi(self.height_cm, self.weight_kg);
        if !(12.0..=60.0).contains(&bmi) {
            errors.push(
                "BMI value is out of a reasonable range. Please check your height and weight."
                    .to_string(),
            );
        }
        if !(18..=100).contains(&self.age) {
            errors.push("Age must be between 18 and 100.".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Whether the respondent has ever been married, as the model's raw
    /// `ever_married` binary.
    #[must_use]
    pub fn ever_married(&self) -> bool {
        self.marital_status == MaritalStatus::Married
    }

    /// Whether the respondent ever smoked, as the model's raw
    /// `smoking_status` binary.
    #[must_use]
    pub fn smokes(&self) -> bool {
        self.smoking_status == SmokingStatus::FormerlyOrCurrent
    }
}
