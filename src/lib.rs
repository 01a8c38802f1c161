//! Scoring for psychometric questionnaires.
//!
//! [`scoring::calculate_scores`] turns a completed session's responses into
//! per-category raw and normalized scores plus short recommendations. The
//! remaining modules load configs and session files and render results for
//! the `psyscore` binary.

pub mod config;
pub mod output;
pub mod scoring;
pub mod session;
