//! Intake session state machine.
//!
//! Models the two-step submit flow as explicit states with immutable
//! snapshots passed between them:
//!
//! ```text
//! Editing --review--> Reviewing --confirm--> Submitted
//!    ^                    |
//!    +------- edit -------+
//! ```
//!
//! Each user interaction re-runs against the current stage; there is no
//! shared mutable form state captured by closures. A failed validation
//! keeps the session in Editing and reports every violation at once.

use crate::domain::{RiskAssessment, RiskProfile, SurveyRecord};
use crate::encoding::FeatureVector;
use crate::ports::Classifier;
use crate::StrokeSenseError;

use super::screening::{ScreeningService, Submission};

/// Immutable snapshot shown on the confirmation step: the answers exactly
/// as they will be encoded, plus the derived buckets and BMI.
#[derive(Debug, Clone)]
pub struct ReviewSnapshot {
    pub record: SurveyRecord,
    pub profile: RiskProfile,
}

enum Stage {
    Editing,
    Reviewing(ReviewSnapshot),
    Submitted(Submission),
}

impl Stage {
    fn name(&self) -> &'static str {
        match self {
            Self::Editing => "Editing",
            Self::Reviewing(_) => "Reviewing",
            Self::Submitted(_) => "Submitted",
        }
    }
}

/// One user's intake flow, from blank form to confirmed assessment.
pub struct IntakeSession {
    stage: Stage,
}

impl Default for IntakeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeSession {
    /// Start a new session in the Editing stage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: Stage::Editing,
        }
    }

    /// Name of the current stage, for display and diagnostics.
    #[must_use]
    pub fn stage_name(&self) -> &'static str {
        self.stage.name()
    }

    /// Move Editing → Reviewing with a validated record.
    ///
    /// # Errors
    /// Returns `Validation` (session stays in Editing) if any field is out
    /// of range, or `StageMismatch` if the session is not in Editing.
    pub fn review(&mut self, record: SurveyRecord) -> Result<&ReviewSnapshot, StrokeSenseError> {
        if !matches!(self.stage, Stage::Editing) {
            return Err(self.stage_mismatch("Editing"));
        }

        record
            .validate()
            .map_err(|messages| StrokeSenseError::Validation { messages })?;

        let profile = RiskProfile::derive(&record);
        self.stage = Stage::Reviewing(ReviewSnapshot { record, profile });

        match &self.stage {
            Stage::Reviewing(snapshot) => Ok(snapshot),
            _ => unreachable!("stage was just set to Reviewing"),
        }
    }

    /// Move Reviewing → Editing, handing the answers back for correction.
    ///
    /// # Errors
    /// Returns `StageMismatch` if the session is not in Reviewing.
    pub fn edit(&mut self) -> Result<SurveyRecord, StrokeSenseError> {
        match std::mem::replace(&mut self.stage, Stage::Editing) {
            Stage::Reviewing(snapshot) => Ok(snapshot.record),
            other => {
                self.stage = other;
                Err(self.stage_mismatch("Reviewing"))
            }
        }
    }

    /// Move Reviewing → Submitted: encode the reviewed snapshot, score it,
    /// and store the finished submission.
    ///
    /// # Errors
    /// Returns `StageMismatch` if the session is not in Reviewing, or a
    /// model error if scoring fails (the session stays in Reviewing so the
    /// user can retry after the fault is fixed).
    pub fn confirm<C>(
        &mut self,
        service: &ScreeningService<C>,
    ) -> Result<&Submission, StrokeSenseError>
    where
        C: Classifier,
    {
        let snapshot = match &self.stage {
            Stage::Reviewing(snapshot) => snapshot,
            _ => return Err(self.stage_mismatch("Reviewing")),
        };

        // The snapshot was validated on review; assess re-checks cheaply
        // and runs the rest of the pipeline.
        let submission = service.assess(&snapshot.record)?;
        self.stage = Stage::Submitted(submission);

        match &self.stage {
            Stage::Submitted(submission) => Ok(submission),
            _ => unreachable!("stage was just set to Submitted"),
        }
    }

    /// The reviewed snapshot, if the session is in Reviewing.
    #[must_use]
    pub fn snapshot(&self) -> Option<&ReviewSnapshot> {
        match &self.stage {
            Stage::Reviewing(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// The `user_inputs` handoff slot: the scored feature mapping, readable
    /// once the session is Submitted.
    #[must_use]
    pub fn user_inputs(&self) -> Option<&FeatureVector> {
        match &self.stage {
            Stage::Submitted(submission) => Some(&submission.user_inputs),
            _ => None,
        }
    }

    /// The finished assessment, readable once the session is Submitted.
    #[must_use]
    pub fn assessment(&self) -> Option<&RiskAssessment> {
        match &self.stage {
            Stage::Submitted(submission) => Some(&submission.assessment),
            _ => None,
        }
    }

    fn stage_mismatch(&self, expected: &'static str) -> StrokeSenseError {
        StrokeSenseError::StageMismatch {
            expected,
            actual: self.stage.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{ExportedLinearModel, LinearClassifier};
    use crate::domain::{
        BmiCategory, Gender, MaritalStatus, ResidenceType, SmokingStatus, WorkType,
    };
    use crate::encoding::schema;
    use std::sync::Arc;

    fn test_service() -> ScreeningService<LinearClassifier> {
        let columns: Vec<String> = schema::FEATURE_NAMES.iter().map(|s| s.to_string()).collect();
        let model = ExportedLinearModel {
            feature_names: columns.clone(),
            coefficients: vec![0.25; schema::FEATURE_COUNT],
            intercept: -1.8,
        };
        let classifier = LinearClassifier::from_parts(model, columns).expect("valid test model");
        ScreeningService::new(Arc::new(classifier))
    }

    fn sample_record() -> SurveyRecord {
        SurveyRecord {
            age: 45,
            gender: Gender::Female,
            height_cm: 165.0,
            weight_kg: 70.0,
            hypertension: false,
            heart_disease: false,
            diabetes: false,
            marital_status: MaritalStatus::Married,
            residence_type: ResidenceType::Urban,
            work_type: WorkType::Private,
            smoking_status: SmokingStatus::NonSmoker,
        }
    }

    #[test]
    fn test_full_flow_editing_to_submitted() {
        let service = test_service();
        let mut session = IntakeSession::new();
        assert_eq!(session.stage_name(), "Editing");

        let snapshot = session.review(sample_record()).expect("review");
        assert!((snapshot.profile.bmi - 25.7).abs() < f64::EPSILON);
        assert_eq!(snapshot.profile.bmi_category, BmiCategory::Overweight);
        assert_eq!(session.stage_name(), "Reviewing");

        let submission = session.confirm(&service).expect("confirm");
        assert_eq!(submission.user_inputs.len(), schema::FEATURE_COUNT);
        assert_eq!(session.stage_name(), "Submitted");

        // Handoff slot is readable after submission.
        let inputs = session.user_inputs().expect("user_inputs");
        assert_eq!(inputs.get("age_group_Young (<49)"), Some(1.0));
        assert!(session.assessment().is_some());
    }

    #[test]
    fn test_invalid_record_stays_in_editing() {
        let mut session = IntakeSession::new();
        let mut record = sample_record();
        record.height_cm = 90.0;

        let err = session.review(record).expect_err("invalid");
        assert!(matches!(err, StrokeSenseError::Validation { .. }));
        assert_eq!(session.stage_name(), "Editing");
        assert!(session.snapshot().is_none());
    }

    #[test]
    fn test_edit_returns_record_for_correction() {
        let mut session = IntakeSession::new();
        session.review(sample_record()).expect("review");

        let record = session.edit().expect("edit");
        assert_eq!(record, sample_record());
        assert_eq!(session.stage_name(), "Editing");
    }

    #[test]
    fn test_confirm_requires_reviewing() {
        let service = test_service();
        let mut session = IntakeSession::new();

        let err = session.confirm(&service).expect_err("wrong stage");
        match err {
            StrokeSenseError::StageMismatch { expected, actual } => {
                assert_eq!(expected, "Reviewing");
                assert_eq!(actual, "Editing");
            }
            other => panic!("expected StageMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_review_requires_editing() {
        let mut session = IntakeSession::new();
        session.review(sample_record()).expect("review");

        let err = session.review(sample_record()).expect_err("wrong stage");
        assert!(matches!(err, StrokeSenseError::StageMismatch { .. }));
        // Snapshot is untouched by the rejected call.
        assert!(session.snapshot().is_some());
    }

    #[test]
    fn test_user_inputs_unreadable_before_submission() {
        let mut session = IntakeSession::new();
        assert!(session.user_inputs().is_none());
        session.review(sample_record()).expect("review");
        assert!(session.user_inputs().is_none());
    }
}
