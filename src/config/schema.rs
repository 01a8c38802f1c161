use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::scoring::{AssessmentType, ScoringConfig};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub assessments: Vec<AssessmentConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assessments: AssessmentType::ALL
                .iter()
                .map(|preset| AssessmentConfig {
                    name: preset.key().to_string(),
                    preset: Some(*preset),
                    scoring: None,
                })
                .collect(),
        }
    }
}

impl Config {
    pub fn find_assessment(&self, name: &str) -> Option<&AssessmentConfig> {
        self.assessments.iter().find(|a| a.name == name)
    }

    /// Scoring config for the named assessment
    pub fn scoring_for(&self, name: &str) -> Result<ScoringConfig> {
        let assessment = self
            .find_assessment(name)
            .with_context(|| format!("Unknown assessment '{}'", name))?;
        assessment.effective_scoring().with_context(|| {
            format!("Assessment '{}' needs either a preset or a scoring section", name)
        })
    }
}

/// One assessment a deployment scores. `scoring` overrides `preset`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AssessmentConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<AssessmentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<ScoringConfig>,
}

impl AssessmentConfig {
    /// Scoring config in effect, or None if neither scoring nor preset is set
    pub fn effective_scoring(&self) -> Option<ScoringConfig> {
        self.scoring
            .clone()
            .or_else(|| self.preset.map(|p| p.default_config()))
    }
}
