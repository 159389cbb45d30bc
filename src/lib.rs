//! # StrokeSense
//!
//! Feature-encoding core for a stroke-risk intake survey.
//!
//! This crate turns raw survey answers into the fixed 22-column feature
//! vector expected by a pre-trained classifier loaded from disk:
//!
//! - `domain`: survey record, BMI, and the rule tables deriving the
//!   categorical risk buckets (age group, age-gender risk, health risk,
//!   stress level)
//! - `encoding`: the statically enumerated feature schema and the
//!   one-hot feature-vector builder
//! - `ports`: the `Classifier` trait abstracting the serialized model
//! - `adapters`: `LinearClassifier`, loading `model.json` and
//!   `feature_columns.json` and scoring via a calibrated logistic model
//! - `application`: the Editing → Reviewing → Submitted intake session
//!   and the screening pipeline orchestration
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture: domain types are pure and the
//! classifier integration sits behind a port, so the encoding contract can
//! be tested without any model artifacts on disk.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod encoding;
pub mod ports;

pub use application::{IntakeSession, ScreeningService};
pub use domain::{RiskAssessment, RiskLevel, SurveyRecord};
pub use encoding::FeatureVector;

/// Result type for StrokeSense operations
pub type Result<T> = std::result::Result<T, StrokeSenseError>;

/// Main error type for StrokeSense
#[derive(Debug, thiserror::Error)]
pub enum StrokeSenseError {
    /// One or more survey fields are out of their declared ranges.
    ///
    /// Carries every failed check at once so the caller can show the whole
    /// list, not just the first failure.
    #[error("invalid survey input: {}", .messages.join(" "))]
    Validation { messages: Vec<String> },

    #[error("model error: {0}")]
    Model(#[from] ports::ModelError),

    #[error("intake session is in stage {actual}, expected {expected}")]
    StageMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
