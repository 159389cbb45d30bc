//! Classifier port: Trait for the pre-trained risk model.
//!
//! This trait abstracts the model artifact format from the application
//! logic, so the intake pipeline can be tested against a stub.

use crate::domain::PredictionOutcome;
use crate::encoding::FeatureVector;

/// Errors from loading or invoking a model artifact.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A required artifact file is missing or unreadable.
    #[error("model artifact not found: {0}")]
    ArtifactMissing(std::path::PathBuf),

    /// An artifact could not be parsed.
    #[error("model artifact malformed: {0}")]
    Malformed(String),

    /// Artifact contents disagree with each other (e.g. coefficient count
    /// vs feature names).
    #[error("model artifacts incompatible: {0}")]
    Incompatible(String),

    /// The model's declared feature order does not match the statically
    /// enumerated encoding schema.
    #[error(
        "feature schema drift: missing columns {missing:?}, unexpected columns {unexpected:?}"
    )]
    SchemaDrift {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    /// Prediction produced a non-finite value.
    #[error("prediction failed: {0}")]
    Prediction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for the serialized classifier.
///
/// Implementations declare the feature order persisted at training time and
/// score a feature vector against it.
pub trait Classifier: Send + Sync {
    /// The ordered feature names the model was trained on.
    fn feature_order(&self) -> &[String];

    /// Score a feature vector.
    ///
    /// The vector is materialized positionally in [`feature_order`]; keys
    /// the vector does not carry fill with 0 before scoring.
    ///
    /// [`feature_order`]: Classifier::feature_order
    ///
    /// # Errors
    /// Returns `ModelError::Prediction` if scoring fails.
    fn predict(&self, features: &FeatureVector) -> Result<PredictionOutcome, ModelError>;
}
