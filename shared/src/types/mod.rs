//! Core data types

pub mod device;
pub mod image;
pub mod profile;
