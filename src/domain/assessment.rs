//! Assessment result types.
//!
//! Represents the output of the stroke risk prediction.

use serde::{Deserialize, Serialize};

/// Risk level classification for stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Low risk of stroke
    Low,
    /// Moderate risk, monitoring recommended
    Moderate,
    /// High risk, intervention recommended
    High,
}

impl RiskLevel {
    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low risk - No significant indicators",
            Self::Moderate => "Moderate risk - Follow-up recommended",
            Self::High => "High risk - Immediate consultation advised",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Moderate => write!(f, "MODERATE"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Result of the classifier call (before interpretation).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PredictionOutcome {
    /// Raw prediction probability (0.0 to 1.0)
    pub probability: f64,

    /// Binary prediction (0 = low risk, 1 = stroke risk present)
    pub prediction: u8,

    /// Confidence score (0.0 to 1.0)
    pub confidence: f64,
}

impl PredictionOutcome {
    /// Create a new prediction outcome.
    #[must_use]
    pub fn new(probability: f64) -> Self {
        let prediction = u8::from(probability >= 0.5);
        let confidence = if probability >= 0.5 {
            probability
        } else {
            1.0 - probability
        };

        Self {
            probability,
            prediction,
            confidence,
        }
    }

    /// Get the risk level based on probability thresholds.
    #[must_use]
    pub fn risk_level(&self) -> RiskLevel {
        if self.probability < 0.3 {
            RiskLevel::Low
        } else if self.probability < 0.7 {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }
}

/// Complete assessment record for one confirmed submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// The classifier prediction
    pub result: PredictionOutcome,

    /// Risk classification
    pub risk_level: RiskLevel,

    /// Timestamp of assessment
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl RiskAssessment {
    /// Create a new assessment from a prediction outcome.
    #[must_use]
    pub fn new(result: PredictionOutcome) -> Self {
        Self {
            risk_level: result.risk_level(),
            result,
            created_at: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_from_probability() {
        assert_eq!(PredictionOutcome::new(0.1).risk_level(), RiskLevel::Low);
        assert_eq!(PredictionOutcome::new(0.5).risk_level(), RiskLevel::Moderate);
        assert_eq!(PredictionOutcome::new(0.9).risk_level(), RiskLevel::High);
    }

    #[test]
    fn test_prediction_threshold_and_confidence() {
        let low = PredictionOutcome::new(0.2);
        assert_eq!(low.prediction, 0);
        assert!((low.confidence - 0.8).abs() < f64::EPSILON);

        let high = PredictionOutcome::new(0.75);
        assert_eq!(high.prediction, 1);
        assert!((high.confidence - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_assessment_creation() {
        let assessment = RiskAssessment::new(PredictionOutcome::new(0.75));
        assert_eq!(assessment.risk_level, RiskLevel::High);
        assert_eq!(assessment.result.prediction, 1);
    }
}
