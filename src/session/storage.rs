use super::types::{ScoreReport, Session, REPORT_VERSION};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::path::Path;

/// Load a session (question bank + responses) from a JSON file
pub fn load_session(path: &Path) -> Result<Session> {
    if !path.exists() {
        anyhow::bail!("Session file not found at {}", path.display());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open session file at {}", path.display()))?;

    let session: Session = serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse session file at {}", path.display()))?;

    Ok(session)
}

/// Load a previously saved score report
///
/// Returns an error if the report has an unsupported version.
pub fn load_report(path: &Path) -> Result<ScoreReport> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open score report at {}", path.display()))?;

    let report: ScoreReport =
        serde_json::from_reader(file).context("Failed to load score report")?;

    if report.version != REPORT_VERSION {
        anyhow::bail!("Unsupported score report version: {}", report.version);
    }

    Ok(report)
}

/// Save a score report to a JSON file atomically
///
/// Uses atomic-write-file to ensure the file is never left half-written.
pub fn save_report(path: &Path, report: &ScoreReport) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, report).context("Failed to serialize score report")?;

    file.commit().context("Failed to save score report")?;

    Ok(())
}
