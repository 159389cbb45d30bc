//! Screening service: Orchestrates the survey-to-prediction pipeline.
//!
//! This service coordinates:
//! - Input validation
//! - Risk bucket derivation
//! - Feature vector encoding
//! - Classifier scoring

use std::sync::Arc;

use crate::domain::{RiskAssessment, RiskProfile, SurveyRecord};
use crate::encoding::FeatureVector;
use crate::ports::Classifier;
use crate::StrokeSenseError;

/// The finished output of one confirmed submission.
///
/// `user_inputs` is the named handoff slot a downstream results view reads;
/// it carries the exact feature mapping that was scored.
#[derive(Debug, Clone)]
pub struct Submission {
    pub user_inputs: FeatureVector,
    pub assessment: RiskAssessment,
}

/// Service for running the screening pipeline against a loaded classifier.
///
/// The classifier is loaded once and shared for the process lifetime; the
/// service itself holds no per-request state.
pub struct ScreeningService<C>
where
    C: Classifier,
{
    classifier: Arc<C>,
}

impl<C> ScreeningService<C>
where
    C: Classifier,
{
    /// Create a new screening service.
    pub fn new(classifier: Arc<C>) -> Self {
        Self { classifier }
    }

    /// Run the full pipeline on one survey record.
    ///
    /// Performs, in order:
    /// 1. Range validation (all violations reported together)
    /// 2. Risk bucket derivation
    /// 3. Feature vector encoding
    /// 4. Classifier scoring
    ///
    /// # Errors
    /// Returns `Validation` with the accumulated message list if any field
    /// is out of range, or a model error if scoring fails.
    pub fn assess(&self, record: &SurveyRecord) -> Result<Submission, StrokeSenseError> {
        tracing::debug!("Step 1: Validating survey record...");
        record
            .validate()
            .map_err(|messages| StrokeSenseError::Validation { messages })?;

        tracing::debug!("Step 2: Deriving risk buckets...");
        let profile = RiskProfile::derive(record);

        tracing::debug!("Step 3: Encoding feature vector...");
        let user_inputs = FeatureVector::build(record, &profile);

        tracing::debug!("Step 4: Scoring against classifier...");
        let outcome = self.classifier.predict(&user_inputs)?;
        let assessment = RiskAssessment::new(outcome);

        tracing::info!(
            "Assessment complete: prediction={}, confidence={:.2}%, risk={}",
            assessment.result.prediction,
            assessment.result.confidence * 100.0,
            assessment.risk_level
        );

        Ok(Submission {
            user_inputs,
            assessment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{ExportedLinearModel, LinearClassifier};
    use crate::domain::{
        Gender, MaritalStatus, ResidenceType, RiskLevel, SmokingStatus, WorkType,
    };
    use crate::encoding::schema;

    fn test_classifier(weight: f64, intercept: f64) -> LinearClassifier {
        let columns: Vec<String> = schema::FEATURE_NAMES.iter().map(|s| s.to_string()).collect();
        let model = ExportedLinearModel {
            feature_names: columns.clone(),
            coefficients: vec![weight; schema::FEATURE_COUNT],
            intercept,
        };
        LinearClassifier::from_parts(model, columns).expect("valid test model")
    }

    fn test_service(weight: f64, intercept: f64) -> ScreeningService<LinearClassifier> {
        ScreeningService::new(Arc::new(test_classifier(weight, intercept)))
    }

    fn sample_record() -> SurveyRecord {
        SurveyRecord {
            age: 68,
            gender: Gender::Male,
            height_cm: 172.0,
            weight_kg: 90.0,
            hypertension: true,
            heart_disease: true,
            diabetes: false,
            marital_status: MaritalStatus::Married,
            residence_type: ResidenceType::Urban,
            work_type: WorkType::SelfEmployed,
            smoking_status: SmokingStatus::FormerlyOrCurrent,
        }
    }

    #[test]
    fn test_pipeline_produces_submission() {
        let service = test_service(0.4, -2.0);
        let submission = service.assess(&sample_record()).expect("assess");

        assert_eq!(submission.user_inputs.len(), schema::FEATURE_COUNT);
        assert!(submission.assessment.result.probability > 0.0);
        assert!(submission.assessment.result.probability < 1.0);
    }

    #[test]
    fn test_invalid_record_is_rejected_with_all_messages() {
        let service = test_service(0.0, 0.0);
        let mut record = sample_record();
        record.age = 101;
        record.weight_kg = 250.0;

        let err = service.assess(&record).expect_err("must fail validation");
        match err {
            StrokeSenseError::Validation { messages } => {
                // Weight, BMI, and age all out of range.
                assert_eq!(messages.len(), 3);
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_strong_negative_intercept_maps_to_low_risk() {
        let service = test_service(0.0, -4.0);
        let submission = service.assess(&sample_record()).expect("assess");
        assert_eq!(submission.assessment.risk_level, RiskLevel::Low);
        assert_eq!(submission.assessment.result.prediction, 0);
    }

    #[test]
    fn test_assessment_is_deterministic() {
        let service = test_service(0.3, -1.0);
        let record = sample_record();
        let first = service.assess(&record).expect("assess");
        let second = service.assess(&record).expect("assess");
        assert_eq!(first.user_inputs, second.user_inputs);
        assert!(
            (first.assessment.result.probability - second.assessment.result.probability).abs()
                < f64::EPSILON
        );
    }
}
