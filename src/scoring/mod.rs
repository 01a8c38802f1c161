pub mod config;
pub mod engine;
mod recommendations;
pub mod response;
pub mod validation;

pub use config::*;
pub use engine::{calculate_scores, CategoryScores, ScoreResult, RATING_SCALE_MAX};
pub use recommendations::BALANCE_GAP_THRESHOLD;
pub use response::{Question, ResponseRecord, ResponseValue};
pub use validation::{check_inputs, validate_scoring};
