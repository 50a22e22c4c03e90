//! JSON export of profiling reports

use super::{stage, StagedFile};
use anyhow::{Context, Result};
use std::path::Path;
use syckle_shared::ProfileReport;
use tracing::debug;

/// Stage a profiling report as pretty-printed JSON
pub fn stage_json(report: &ProfileReport, path: &Path) -> Result<StagedFile> {
    let staged = stage(path, |w| {
        serde_json::to_writer_pretty(&mut *w, report)
            .context("Failed to serialize profiling report to JSON")?;
        Ok(())
    })?;

    debug!("JSON report staged for {}", path.display());
    Ok(staged)
}
