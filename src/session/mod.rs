pub mod storage;
pub mod types;

pub use storage::{load_report, load_session, save_report};
pub use types::{ScoreReport, Session, REPORT_VERSION};
