//! Subcommand implementations

pub mod blur;
pub mod ls;
pub mod nn;
pub mod vector;

use std::path::PathBuf;

/// Value parser for input paths that must already exist
pub fn existing_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("file does not exist: {}", s))
    }
}
