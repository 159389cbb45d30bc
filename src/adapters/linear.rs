//! Linear classifier adapter: loads and scores the exported model.
//!
//! Two artifacts live in the model directory:
//!
//! - `model.json`: feature names, coefficients, and intercept of the
//!   calibrated logistic model exported by the training pipeline
//! - `feature_columns.json`: the ordered feature-name list persisted at
//!   training time, authoritative for positional materialization
//!
//! Loading validates the artifacts against each other and against the
//! statically enumerated encoding schema. Any mismatch is a fatal load
//! error: schema drift must fail here, not mispredict silently later.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::PredictionOutcome;
use crate::encoding::{schema, FeatureVector};
use crate::ports::{Classifier, ModelError};

/// Environment variable overriding the model directory.
pub const MODEL_PATH_ENV: &str = "STROKESENSE_MODEL_PATH";

/// Model directory to load artifacts from: `STROKESENSE_MODEL_PATH` if set,
/// otherwise `models` relative to the process working directory.
#[must_use]
pub fn default_model_dir() -> PathBuf {
    std::env::var(MODEL_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("models"))
}

/// Model parameters exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedLinearModel {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// Classifier backed by the exported logistic model.
///
/// Artifacts are read once at construction and held for the process
/// lifetime; there is no reload path.
#[derive(Debug)]
pub struct LinearClassifier {
    model: ExportedLinearModel,
    feature_order: Vec<String>,
}

impl LinearClassifier {
    /// Load both artifacts from the model directory.
    ///
    /// # Errors
    /// Returns an error if either file is missing or unparsable, if the
    /// artifacts disagree with each other, or if the declared feature order
    /// drifts from the encoding schema. All of these are unrecoverable
    /// startup faults; there is no retry.
    pub fn load(model_dir: &Path) -> Result<Self, ModelError> {
        let model_path = model_dir.join("model.json");
        let columns_path = model_dir.join("feature_columns.json");

        let model: ExportedLinearModel = read_json(&model_path)?;
        let feature_order: Vec<String> = read_json(&columns_path)?;

        let classifier = Self::from_parts(model, feature_order)?;

        tracing::info!(
            "Loaded model from {:?} (n_features={}, intercept={:.4})",
            model_dir,
            classifier.feature_order.len(),
            classifier.model.intercept
        );

        Ok(classifier)
    }

    /// Construct from already-deserialized artifacts, running every check
    /// `load` would run.
    ///
    /// # Errors
    /// Returns an error on artifact disagreement or schema drift.
    pub fn from_parts(
        model: ExportedLinearModel,
        feature_order: Vec<String>,
    ) -> Result<Self, ModelError> {
        if model.coefficients.len() != model.feature_names.len() {
            return Err(ModelError::Incompatible(format!(
                "coefficient count {} does not match feature name count {}",
                model.coefficients.len(),
                model.feature_names.len()
            )));
        }

        if model.feature_names != feature_order {
            return Err(ModelError::Incompatible(
                "model.json feature_names disagree with feature_columns.json".into(),
            ));
        }

        check_schema_drift(&feature_order)?;

        Ok(Self {
            model,
            feature_order,
        })
    }

    fn sigmoid(x: f64) -> f64 {
        1.0 / (1.0 + (-x).exp())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    if !path.exists() {
        return Err(ModelError::ArtifactMissing(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| ModelError::Malformed(format!("{}: {e}", path.display())))
}

/// Compare the model's declared feature order with the encoding schema.
///
/// Both directions are checked: a column the model expects but the builder
/// never emits would score as a silent zero; a schema column the model does
/// not consume means the artifacts belong to a different training run.
fn check_schema_drift(feature_order: &[String]) -> Result<(), ModelError> {
    let missing: Vec<String> = schema::FEATURE_NAMES
        .iter()
        .filter(|name| !feature_order.iter().any(|f| f.as_str() == **name))
        .map(|name| (*name).to_string())
        .collect();
    let unexpected: Vec<String> = feature_order
        .iter()
        .filter(|name| !schema::contains(name))
        .cloned()
        .collect();

    if missing.is_empty() && unexpected.is_empty() {
        Ok(())
    } else {
        Err(ModelError::SchemaDrift {
            missing,
            unexpected,
        })
    }
}

impl Classifier for LinearClassifier {
    fn feature_order(&self) -> &[String] {
        &self.feature_order
    }

    fn predict(&self, features: &FeatureVector) -> Result<PredictionOutcome, ModelError> {
        let aligned = features.align(&self.feature_order);

        let logit: f64 = aligned
            .iter()
            .zip(self.model.coefficients.iter())
            .map(|(x, w)| x * w)
            .sum::<f64>()
            + self.model.intercept;

        let probability = Self::sigmoid(logit);

        if !probability.is_finite() {
            return Err(ModelError::Prediction(
                "scoring produced non-finite probability".into(),
            ));
        }

        tracing::debug!(
            "Scored feature vector: logit={:.4}, probability={:.4}",
            logit,
            probability
        );

        Ok(PredictionOutcome::new(probability))
    }
}
