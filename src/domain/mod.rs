//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no external integration.
//! All types are serializable, and every bucketing function is a total,
//! deterministic rule table.

mod assessment;
mod bmi;
mod risk;
mod survey;

pub use assessment::{PredictionOutcome, RiskAssessment, RiskLevel};
pub use bmi::{calculate_bmi, BmiCategory};
pub use risk::{
    age_gender_to_risk, age_to_age_group, health_risk_level, stress_level_category, AgeGenderRisk,
    AgeGroup, HealthRisk, RiskProfile, StressLevel,
};
pub use survey::{
    EmploymentClass, Gender, MaritalStatus, ResidenceType, SmokingStatus, SurveyRecord, WorkType,
};
