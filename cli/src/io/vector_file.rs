//! Vector text files
//!
//! Input holds exactly two lines of whitespace-separated integers: line one
//! is `a`, line two is `b`. An empty line is an empty vector. Output is a
//! single line of space-separated integers.

use super::{stage, StagedFile};
use anyhow::{anyhow, bail, Context, Result};
use std::io::Write;
use std::path::Path;
use syckle_shared::utils::join_values;

/// Parse the two input vectors from file contents
pub fn parse_vectors(text: &str) -> Result<(Vec<i32>, Vec<i32>)> {
    let mut lines = text.lines();
    let first = lines
        .next()
        .ok_or_else(|| anyhow!("expected two lines of integers, found none"))?;
    let second = lines
        .next()
        .ok_or_else(|| anyhow!("expected two lines of integers, found one"))?;

    if let Some(extra) = lines.find(|l| !l.trim().is_empty()) {
        bail!("unexpected data after the second line: '{}'", extra.trim());
    }

    let a = parse_line(first).context("Failed to parse vector a")?;
    let b = parse_line(second).context("Failed to parse vector b")?;
    Ok((a, b))
}

fn parse_line(line: &str) -> Result<Vec<i32>> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<i32>()
                .with_context(|| format!("invalid integer '{}'", token))
        })
        .collect()
}

/// Read the two input vectors from `path`
pub fn read_vectors(path: &Path) -> Result<(Vec<i32>, Vec<i32>)> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    parse_vectors(&text).with_context(|| format!("Malformed input file: {}", path.display()))
}

/// Stage the result vector for `path`
pub fn stage_vector(path: &Path, values: &[i32]) -> Result<StagedFile> {
    stage(path, |w| {
        writeln!(w, "{}", join_values(values))?;
        Ok(())
    })
}
