use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::{calculate_scores, Question, ResponseRecord, ScoreResult, ScoringConfig};

pub const REPORT_VERSION: u32 = 1;

/// A completed questionnaire: the question bank plus the answers given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Session {
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub responses: Vec<ResponseRecord>,
}

impl Session {
    pub fn score(&self, config: &ScoringConfig) -> ScoreResult {
        calculate_scores(&self.responses, config, &self.questions)
    }
}

/// Scored session as written to disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreReport {
    pub version: u32,
    pub assessment: String,
    pub scored_at: DateTime<Utc>,
    pub result: ScoreResult,
}

impl ScoreReport {
    pub fn new(assessment: impl Into<String>, result: ScoreResult) -> Self {
        Self {
            version: REPORT_VERSION,
            assessment: assessment.into(),
            scored_at: Utc::now(),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::AssessmentType;

    #[test]
    fn test_session_parse_and_score() {
        let json = r#"{
            "questions": [
                {"id": "v1", "category": "visual"},
                {"id": "a1", "category": "auditory", "weight": 2}
            ],
            "responses": [
                {"questionId": "v1", "value": ["diagram", "map"]},
                {"questionId": "a1", "value": "lecture"}
            ]
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        let result = session.score(&AssessmentType::Vark.default_config());

        assert_eq!(result.raw_scores["visual"], 2.0);
        assert_eq!(result.raw_scores["auditory"], 2.0);
        assert_eq!(result.raw_scores["kinesthetic"], 0.0);
        // visual: 2 / 1 question * 100
        assert_eq!(result.processed_scores["visual"], 200.0);
    }

    #[test]
    fn test_null_value_fails_whole_session() {
        let json = r#"{
            "questions": [{"id": "q1", "category": "visual"}],
            "responses": [
                {"questionId": "q1", "value": "map"},
                {"questionId": "q1", "value": null}
            ]
        }"#;
        assert!(serde_json::from_str::<Session>(json).is_err());
    }

    #[test]
    fn test_empty_session_parses() {
        let session: Session = serde_json::from_str("{}").unwrap();
        assert!(session.questions.is_empty());
        assert!(session.responses.is_empty());
    }

    #[test]
    fn test_new_report_is_current_version() {
        let result = Session::default().score(&AssessmentType::Disc.default_config());
        let report = ScoreReport::new("disc", result);
        assert_eq!(report.version, REPORT_VERSION);
        assert_eq!(report.assessment, "disc");
        assert!(report.scored_at <= Utc::now());
    }
}
