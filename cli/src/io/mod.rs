//! File input and output for commands
//!
//! Output files are first written to a temporary file in the destination
//! directory ([`stage`]) and only renamed into place on
//! [`StagedFile::commit`]. Commands stage every artifact before committing
//! any of them, so a failed command never leaves output behind.

pub mod image_file;
pub mod report;
pub mod vector_file;

use anyhow::{Context, Result};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Fully written output waiting to be moved to its final path
#[derive(Debug)]
pub struct StagedFile {
    temp: NamedTempFile,
    path: PathBuf,
}

impl StagedFile {
    /// Final destination
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Move the file into place
    pub fn commit(self) -> Result<()> {
        let Self { temp, path } = self;
        temp.persist(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(())
    }
}

/// Write the contents of `path` to a temporary file through `write`.
///
/// Dropping the returned [`StagedFile`] without committing removes it.
pub fn stage<F>(path: &Path, write: F) -> Result<StagedFile>
where
    F: FnOnce(&mut BufWriter<&mut NamedTempFile>) -> Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;

    {
        let mut writer = BufWriter::new(&mut temp);
        write(&mut writer)?;
        writer
            .flush()
            .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    }

    Ok(StagedFile {
        temp,
        path: path.to_path_buf(),
    })
}

/// Commit staged files in order
pub fn commit_all(files: impl IntoIterator<Item = StagedFile>) -> Result<()> {
    for file in files {
        file.commit()?;
    }
    Ok(())
}
