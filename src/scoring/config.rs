use serde::{Deserialize, Serialize};

/// Scoring configuration for one assessment type.
///
/// Declares which categories are scored, how a single response contributes
/// to its category, and how the per-category totals are normalized.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   categories: [dominance, influence, steadiness, conscientiousness]
///   scoring_method: forced_choice
///   normalization: percentage
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Ordered category keys. Order decides tie-breaks when ranking.
    pub categories: Vec<String>,

    /// How a single response contributes to its category's raw score
    #[serde(alias = "scoringMethod")]
    pub scoring_method: ScoringMethod,

    /// How raw totals become reported scores
    pub normalization: Normalization,
}

impl ScoringConfig {
    pub fn new<I, S>(categories: I, scoring_method: ScoringMethod, normalization: Normalization) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            scoring_method,
            normalization,
        }
    }

    /// True if `category` is one of the configured buckets
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        AssessmentType::MultipleIntelligence.default_config()
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMethod {
    /// Rating value times weight; non-numeric answers count as one unit
    WeightedSum,
    /// Each answered question adds its weight
    ForcedChoice,
    /// Each selected option adds the question weight
    MultiselectCount,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// 0-100 relative to the maximum attainable score
    Percentage,
    /// Raw total passed through unchanged
    Raw,
    /// Mean per question, one decimal place
    Standardized,
}

/// Built-in questionnaire instruments.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum AssessmentType {
    MultipleIntelligence,
    Disc,
    Vark,
}

impl AssessmentType {
    pub const ALL: [AssessmentType; 3] = [
        AssessmentType::MultipleIntelligence,
        AssessmentType::Disc,
        AssessmentType::Vark,
    ];

    /// Short name used in config files and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            AssessmentType::MultipleIntelligence => "multiple_intelligence",
            AssessmentType::Disc => "disc",
            AssessmentType::Vark => "vark",
        }
    }

    /// The scoring config this instrument is normally scored with
    pub fn default_config(&self) -> ScoringConfig {
        match self {
            AssessmentType::MultipleIntelligence => ScoringConfig::new(
                [
                    "linguistic",
                    "logical-mathematical",
                    "spatial",
                    "bodily-kinesthetic",
                    "musical",
                    "interpersonal",
                    "intrapersonal",
                    "naturalist",
                ],
                ScoringMethod::WeightedSum,
                Normalization::Percentage,
            ),
            AssessmentType::Disc => ScoringConfig::new(
                ["dominance", "influence", "steadiness", "conscientiousness"],
                ScoringMethod::ForcedChoice,
                Normalization::Percentage,
            ),
            AssessmentType::Vark => ScoringConfig::new(
                ["visual", "auditory", "reading-writing", "kinesthetic"],
                ScoringMethod::MultiselectCount,
                Normalization::Percentage,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_config() {
        let config = ScoringConfig::default();

        assert_eq!(config.categories.len(), 8);
        assert_eq!(config.categories[0], "linguistic");
        assert_eq!(config.scoring_method, ScoringMethod::WeightedSum);
        assert_eq!(config.normalization, Normalization::Percentage);
    }

    #[test]
    fn test_scoring_config_serde_roundtrip() {
        let config = AssessmentType::Disc.default_config();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_full_scoring_config_parse() {
        let yaml = r#"
categories:
  - visual
  - auditory
scoring_method: multiselect_count
normalization: standardized
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.categories, vec!["visual", "auditory"]);
        assert_eq!(config.scoring_method, ScoringMethod::MultiselectCount);
        assert_eq!(config.normalization, Normalization::Standardized);
    }

    #[test]
    fn test_camel_case_method_alias() {
        let json = r#"{"categories":["x"],"scoringMethod":"weighted_sum","normalization":"raw"}"#;
        let config: ScoringConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.scoring_method, ScoringMethod::WeightedSum);
        assert_eq!(config.normalization, Normalization::Raw);
    }

    #[test]
    fn test_unknown_method_rejected() {
        let yaml = r#"
categories: [x]
scoring_method: median
normalization: raw
"#;
        let result: Result<ScoringConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = r#"
categories: [x]
scoring_method: forced_choice
normalization: raw
base_score: 100
"#;
        let result: Result<ScoringConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_has_category() {
        let config = AssessmentType::Vark.default_config();
        assert!(config.has_category("visual"));
        assert!(!config.has_category("dominance"));
    }

    #[test]
    fn test_cli_names_match_config_keys() {
        use clap::ValueEnum;

        for preset in AssessmentType::ALL {
            let parsed = AssessmentType::from_str(preset.key(), false);
            assert_eq!(parsed, Ok(preset), "'{}' not accepted on the command line", preset.key());
        }
        assert!(AssessmentType::from_str("multiple-intelligence", false).is_err());
    }

    #[test]
    fn test_presets_use_distinct_methods() {
        assert_eq!(
            AssessmentType::Disc.default_config().scoring_method,
            ScoringMethod::ForcedChoice
        );
        assert_eq!(
            AssessmentType::Vark.default_config().scoring_method,
            ScoringMethod::MultiselectCount
        );
        assert_eq!(AssessmentType::Vark.key(), "vark");
    }
}
