use std::collections::HashMap;
use std::fmt;
use std::ops::Index;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use super::config::{Normalization, ScoringConfig, ScoringMethod};
use super::recommendations::generate_recommendations;
use super::response::{Question, ResponseRecord, ResponseValue};

/// Upper bound of the rating scale assumed for weighted-sum categories
/// when converting to a percentage. Fixed, not derived from the data.
pub const RATING_SCALE_MAX: f64 = 5.0;

/// Per-category scores in configured category order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryScores {
    entries: Vec<(String, f64)>,
}

impl CategoryScores {
    /// Every category at zero. Repeated keys collapse onto their first position.
    fn zeroed(categories: &[String]) -> Self {
        let mut entries: Vec<(String, f64)> = Vec::with_capacity(categories.len());
        for category in categories {
            if !entries.iter().any(|(c, _)| c == category) {
                entries.push((category.clone(), 0.0));
            }
        }
        Self { entries }
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, v)| *v)
    }

    fn get_mut(&mut self, category: &str) -> Option<&mut f64> {
        self.entries
            .iter_mut()
            .find(|(c, _)| c == category)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(c, v)| (c.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest score, or None when there are no categories
    pub fn max_value(&self) -> Option<f64> {
        self.entries.iter().map(|(_, v)| *v).reduce(f64::max)
    }
}

impl Index<&str> for CategoryScores {
    type Output = f64;

    fn index(&self, category: &str) -> &f64 {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, v)| v)
            .unwrap_or_else(|| panic!("no score for category '{}'", category))
    }
}

impl Serialize for CategoryScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(c, v)| (c, v)))
    }
}

impl<'de> Deserialize<'de> for CategoryScores {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScoresVisitor;

        impl<'de> Visitor<'de> for ScoresVisitor {
            type Value = CategoryScores;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category to score")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((category, score)) = map.next_entry::<String, f64>()? {
                    entries.push((category, score));
                }
                Ok(CategoryScores { entries })
            }
        }

        deserializer.deserialize_map(ScoresVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    #[serde(alias = "rawScores")]
    pub raw_scores: CategoryScores,
    #[serde(alias = "processedScores")]
    pub processed_scores: CategoryScores,
    pub recommendations: Vec<String>,
}

/// Score one completed session.
///
/// Responses whose question is missing from `questions`, or whose question
/// belongs to a category outside `config.categories`, are skipped. Every
/// configured category is present in both score maps, zero if nothing
/// contributed to it.
pub fn calculate_scores(
    responses: &[ResponseRecord],
    config: &ScoringConfig,
    questions: &[Question],
) -> ScoreResult {
    let mut raw_scores = CategoryScores::zeroed(&config.categories);
    let mut processed_scores = CategoryScores::zeroed(&config.categories);

    // First question wins when ids repeat in the bank
    let mut bank: HashMap<&str, &Question> = HashMap::with_capacity(questions.len());
    for question in questions {
        bank.entry(question.id.as_str()).or_insert(question);
    }

    let mut skipped = 0usize;
    for response in responses {
        let question = match bank.get(response.question_id.as_str()) {
            Some(q) => *q,
            None => {
                debug!(question_id = %response.question_id, "skipping response for unknown question");
                skipped += 1;
                continue;
            }
        };

        let total = match raw_scores.get_mut(&question.category) {
            Some(total) => total,
            None => {
                debug!(
                    question_id = %question.id,
                    category = %question.category,
                    "skipping response outside configured categories"
                );
                skipped += 1;
                continue;
            }
        };

        *total += contribution(&response.value, question.effective_weight(), config.scoring_method);
    }

    for (category, processed) in processed_scores.entries.iter_mut() {
        let raw = raw_scores.get(category).unwrap_or(0.0);
        let count = question_count(questions, category);
        *processed = normalize(raw, count, config);
    }

    let recommendations = generate_recommendations(&processed_scores);

    trace!(
        responses = responses.len(),
        skipped,
        categories = raw_scores.len(),
        "scored session"
    );

    ScoreResult {
        raw_scores,
        processed_scores,
        recommendations,
    }
}

fn contribution(value: &ResponseValue, weight: f64, method: ScoringMethod) -> f64 {
    match method {
        ScoringMethod::WeightedSum => match value {
            ResponseValue::Rating(n) => n * weight,
            _ => weight,
        },
        ScoringMethod::ForcedChoice => weight,
        ScoringMethod::MultiselectCount => match value {
            ResponseValue::MultiChoice(selected) => selected.len() as f64 * weight,
            _ => weight,
        },
    }
}

/// Questions in the bank for `category`, never less than one.
fn question_count(questions: &[Question], category: &str) -> usize {
    questions
        .iter()
        .filter(|q| q.category == category)
        .count()
        .max(1)
}

fn normalize(raw: f64, question_count: usize, config: &ScoringConfig) -> f64 {
    let count = question_count as f64;
    match config.normalization {
        Normalization::Percentage => {
            let max_possible = match config.scoring_method {
                ScoringMethod::WeightedSum => count * RATING_SCALE_MAX,
                _ => count,
            };
            round_half_up(raw / max_possible * 100.0)
        }
        Normalization::Raw => raw,
        Normalization::Standardized => round_half_up(raw / count * 10.0) / 10.0,
    }
}

/// Nearest integer, halves going toward positive infinity.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
