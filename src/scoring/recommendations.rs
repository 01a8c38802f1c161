use super::engine::CategoryScores;

/// Points between the strongest and weakest category above which a
/// balancing suggestion is added.
pub const BALANCE_GAP_THRESHOLD: f64 = 30.0;

/// Canned strength and practice sentences for well-known categories.
fn strength_advice(category: &str) -> Option<[&'static str; 2]> {
    match category {
        "linguistic" => Some([
            "You have a strong command of words and language.",
            "Try journaling, debating or writing short pieces to keep building this skill.",
        ]),
        "logical-mathematical" => Some([
            "You excel at reasoning through problems and spotting patterns.",
            "Puzzles, coding exercises and strategy games will sharpen this strength further.",
        ]),
        "spatial" => Some([
            "You think well in images and can picture how things fit together.",
            "Sketching, mind maps and design projects are good ways to practice.",
        ]),
        "dominance" => Some([
            "You are direct and decisive, and you naturally take the lead.",
            "Practice inviting input from others before committing to a decision.",
        ]),
        "influence" => Some([
            "You are persuasive and energize the people around you.",
            "Channel this into presentations, mentoring or team facilitation.",
        ]),
        "visual" => Some([
            "You learn best from diagrams, charts and visual layouts.",
            "Turn notes into diagrams and use color coding when studying.",
        ]),
        "auditory" => Some([
            "You learn best by listening and talking ideas through.",
            "Study groups, recorded lectures and explaining topics aloud will help you retain material.",
        ]),
        _ => None,
    }
}

/// Advisory text for a processed score profile.
///
/// The strongest category contributes its canned sentences (or a generic
/// one), followed by a development suggestion for the weakest category when
/// the spread exceeds [`BALANCE_GAP_THRESHOLD`].
pub(crate) fn generate_recommendations(scores: &CategoryScores) -> Vec<String> {
    let mut ranked: Vec<(&str, f64)> = scores.iter().collect();
    // Stable: ties keep category order
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let (top_category, top_score) = match ranked.first() {
        Some(top) => *top,
        None => return Vec::new(),
    };
    let (lowest_category, lowest_score) = match ranked.last() {
        Some(lowest) => *lowest,
        None => return Vec::new(),
    };

    let mut recommendations = match strength_advice(top_category) {
        Some(sentences) => sentences.iter().map(|s| s.to_string()).collect(),
        None => vec![format!(
            "Your strongest area is {}. Focus on developing this further.",
            top_category
        )],
    };

    if top_score - lowest_score > BALANCE_GAP_THRESHOLD {
        recommendations.push(format!(
            "Consider working on your {} skills to build a more balanced profile.",
            lowest_category
        ));
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{calculate_scores, Normalization, Question, ResponseRecord, ScoringConfig, ScoringMethod};

    /// Build a processed-score profile through the engine using raw passthrough.
    fn profile(scores: &[(&str, f64)]) -> CategoryScores {
        let config = ScoringConfig::new(
            scores.iter().map(|(c, _)| *c),
            ScoringMethod::WeightedSum,
            Normalization::Raw,
        );
        let questions: Vec<Question> = scores
            .iter()
            .map(|(c, _)| Question::new(format!("q-{}", c), *c))
            .collect();
        let responses: Vec<ResponseRecord> = scores
            .iter()
            .map(|(c, v)| ResponseRecord::new(format!("q-{}", c), *v))
            .collect();
        calculate_scores(&responses, &config, &questions).processed_scores
    }

    #[test]
    fn test_gap_sentence_names_lowest() {
        let recs = generate_recommendations(&profile(&[("a", 90.0), ("b", 10.0)]));

        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0], "Your strongest area is a. Focus on developing this further.");
        assert!(recs[1].contains(" b "));
    }

    #[test]
    fn test_no_gap_sentence_at_threshold() {
        let recs = generate_recommendations(&profile(&[("a", 40.0), ("b", 10.0)]));
        assert_eq!(recs.len(), 1);
    }

    #[test]
    fn test_known_category_gets_two_sentences() {
        let recs = generate_recommendations(&profile(&[("visual", 80.0), ("auditory", 70.0)]));

        assert_eq!(recs.len(), 2);
        assert!(recs[0].contains("diagrams"));
    }

    #[test]
    fn test_known_category_with_gap() {
        let recs = generate_recommendations(&profile(&[
            ("spatial", 20.0),
            ("linguistic", 95.0),
            ("musical", 40.0),
        ]));

        assert_eq!(recs.len(), 3);
        assert!(recs[0].contains("words and language"));
        assert!(recs[2].contains("spatial"));
    }

    #[test]
    fn test_ties_keep_category_order() {
        let recs = generate_recommendations(&profile(&[("influence", 50.0), ("dominance", 50.0)]));
        assert!(recs[0].contains("persuasive"));
    }

    #[test]
    fn test_single_category_is_both_top_and_lowest() {
        let recs = generate_recommendations(&profile(&[("dominance", 80.0)]));
        assert_eq!(recs.len(), 2);
        assert!(recs[0].contains("lead"));
    }

    #[test]
    fn test_empty_profile() {
        assert!(generate_recommendations(&CategoryScores::default()).is_empty());
    }

    #[test]
    fn test_table_covers_known_categories() {
        for category in [
            "linguistic",
            "logical-mathematical",
            "spatial",
            "dominance",
            "influence",
            "visual",
            "auditory",
        ] {
            assert!(strength_advice(category).is_some(), "missing advice for {}", category);
        }
        assert!(strength_advice("steadiness").is_none());
    }
}
