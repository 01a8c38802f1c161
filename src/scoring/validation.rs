use std::collections::HashSet;

use super::config::{ScoringConfig, ScoringMethod};
use super::engine::RATING_SCALE_MAX;
use super::response::{Question, ResponseRecord, ResponseValue};

/// Validate a scoring configuration before use.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.categories.is_empty() {
        errors.push("scoring.categories: at least one category is required".to_string());
    }

    let mut seen = HashSet::new();
    for (i, category) in config.categories.iter().enumerate() {
        if category.trim().is_empty() {
            errors.push(format!("scoring.categories[{}]: must not be blank", i));
        } else if !seen.insert(category.as_str()) {
            errors.push(format!(
                "scoring.categories[{}]: duplicate category '{}'",
                i, category
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Report input problems that scoring silently tolerates.
///
/// None of these change the computed scores; they point at stale question
/// banks or misconfigured assessments.
pub fn check_inputs(
    responses: &[ResponseRecord],
    config: &ScoringConfig,
    questions: &[Question],
) -> Vec<String> {
    let mut warnings = Vec::new();

    for (i, question) in questions.iter().enumerate() {
        if !config.has_category(&question.category) {
            warnings.push(format!(
                "questions[{}] '{}': category '{}' is not scored by this assessment",
                i, question.id, question.category
            ));
        }
        if let Some(weight) = question.weight {
            if !weight.is_finite() || weight < 0.0 {
                warnings.push(format!(
                    "questions[{}] '{}': weight {} is not a positive number",
                    i, question.id, weight
                ));
            } else if weight == 0.0 {
                warnings.push(format!(
                    "questions[{}] '{}': weight 0 is treated as 1",
                    i, question.id
                ));
            }
        }
    }

    for category in &config.categories {
        if !questions.iter().any(|q| &q.category == category) {
            warnings.push(format!("category '{}' has no questions", category));
        }
    }

    let known_ids: HashSet<&str> = questions.iter().map(|q| q.id.as_str()).collect();
    for (i, response) in responses.iter().enumerate() {
        if !known_ids.contains(response.question_id.as_str()) {
            warnings.push(format!(
                "responses[{}]: unknown question '{}'",
                i, response.question_id
            ));
            continue;
        }
        if config.scoring_method == ScoringMethod::WeightedSum {
            if let ResponseValue::Rating(n) = response.value {
                if !(1.0..=RATING_SCALE_MAX).contains(&n) {
                    warnings.push(format!(
                        "responses[{}]: rating {} is outside 1-{}",
                        i, n, RATING_SCALE_MAX
                    ));
                }
            }
        }
    }

    warnings
}
