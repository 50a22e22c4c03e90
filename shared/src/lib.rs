//! Shared types and utilities for SYCkLe
//!
//! This crate contains the immutable descriptors passed between the compute
//! engine and the command-line front end: device and platform descriptors,
//! the interleaved image layout, and profiling samples/reports.

pub mod types;
pub mod utils;

// Re-export commonly used types
pub use types::{device::*, image::*, profile::*};
