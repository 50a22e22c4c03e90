//! Utility functions and helpers

pub mod time;

use std::fmt::Display;

/// Join values with single spaces, the layout used for vectors on the
/// console and in vector files
pub fn join_values<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
