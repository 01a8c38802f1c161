use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::scoring::{Normalization, ScoreResult};

const DEFAULT_BAR_WIDTH: usize = 30;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score: integral values without decimals, others with one
/// decimal place ("100", "2.3", "-4")
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{:.1}", score)
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Bar width for the given label column, shrinking on narrow terminals
fn bar_width(label_width: usize) -> usize {
    match get_terminal_width() {
        // label + two spaces + bar + two spaces + "100%  raw 999"
        Some(w) => w.saturating_sub(label_width + 20).clamp(5, DEFAULT_BAR_WIDTH),
        None => DEFAULT_BAR_WIDTH,
    }
}

/// Filled cells for a score. Percentages fill against 100; other
/// normalizations fill relative to the highest category.
fn filled_cells(score: f64, scale_max: f64, width: usize) -> usize {
    if scale_max <= 0.0 || score <= 0.0 {
        return 0;
    }
    let ratio = (score / scale_max).min(1.0);
    (ratio * width as f64).round() as usize
}

fn render_bar(filled: usize, width: usize) -> String {
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a score result as a table of category bars followed by a
/// bulleted recommendation list.
pub fn format_result(result: &ScoreResult, normalization: Normalization, use_colors: bool) -> String {
    if result.processed_scores.is_empty() {
        return "No categories scored.".to_string();
    }

    let label_width = result
        .processed_scores
        .iter()
        .map(|(c, _)| c.chars().count())
        .max()
        .unwrap_or(0);
    let width = bar_width(label_width);

    let scale_max = match normalization {
        Normalization::Percentage => 100.0,
        _ => result.processed_scores.max_value().unwrap_or(0.0),
    };
    let suffix = match normalization {
        Normalization::Percentage => "%",
        _ => "",
    };

    let mut lines = Vec::with_capacity(result.processed_scores.len() + result.recommendations.len() + 2);

    for (category, score) in result.processed_scores.iter() {
        let raw = result.raw_scores.get(category).unwrap_or(0.0);
        let filled = filled_cells(score, scale_max, width);
        let value = format!("{}{}", format_score(score), suffix);
        let raw_str = format!("raw {}", format_score(raw));

        if use_colors {
            lines.push(format!(
                "{:<lw$}  {}{}  {:>6}  {}",
                category.bold(),
                "█".repeat(filled).cyan(),
                "░".repeat(width - filled).dimmed(),
                value.yellow(),
                raw_str.dimmed(),
                lw = label_width
            ));
        } else {
            lines.push(format!(
                "{:<lw$}  {}  {:>6}  {}",
                category,
                render_bar(filled, width),
                value,
                raw_str,
                lw = label_width
            ));
        }
    }

    if !result.recommendations.is_empty() {
        lines.push(String::new());
        if use_colors {
            lines.push(format!("{}", "Recommendations".bold()));
        } else {
            lines.push("Recommendations".to_string());
        }
        for rec in &result.recommendations {
            lines.push(format!("  - {}", rec));
        }
    }

    lines.join("\n")
}
