//! Error taxonomy and the error boundary
//!
//! Every failure inside a dispatch is returned as a [`ComputeError`]. The
//! boundary ([`ComputeError::report`]) logs it under one of three failure
//! domains so that callers only need to know that the job failed.

use syckle_shared::ImageError;
use thiserror::Error;
use tracing::error;

/// Errors raised by device selection, buffer binding and kernel execution
#[derive(Debug, Error)]
pub enum ComputeError {
    /// The platform layer exposes no device at all
    #[error("no compute device available (requested: {requested})")]
    DeviceUnavailable { requested: String },

    /// Vector operands differ in length
    #[error("vectors must be of the same size (a: {a}, b: {b})")]
    SizeMismatch { a: usize, b: usize },

    /// A buffer does not match the kernel's iteration range
    #[error("buffer '{buffer}' has shape {actual}, kernel range requires {expected}")]
    ShapeMismatch {
        buffer: &'static str,
        expected: String,
        actual: String,
    },

    /// Image geometry rejected before submission
    #[error("invalid image: {0}")]
    InvalidImage(#[from] ImageError),

    /// Device-side failure during buffer binding or kernel execution
    #[error("backend error {code}: {message}")]
    Backend { code: i32, message: String },

    /// A queue only ever accepts one job
    #[error("queue on '{device}' already accepted a job")]
    QueueConsumed { device: String },

    /// Generic runtime failure
    #[error("runtime error: {0}")]
    Runtime(String),

    /// Anything that could not be classified (e.g. a panicking kernel)
    #[error("unknown failure: {0}")]
    Unknown(String),
}

/// Coarse classification used by the error boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureDomain {
    Backend,
    Runtime,
    Unknown,
}

impl ComputeError {
    /// Failure domain this error belongs to
    pub fn domain(&self) -> FailureDomain {
        match self {
            ComputeError::DeviceUnavailable { .. }
            | ComputeError::ShapeMismatch { .. }
            | ComputeError::Backend { .. } => FailureDomain::Backend,
            ComputeError::SizeMismatch { .. }
            | ComputeError::InvalidImage(_)
            | ComputeError::QueueConsumed { .. }
            | ComputeError::Runtime(_) => FailureDomain::Runtime,
            ComputeError::Unknown(_) => FailureDomain::Unknown,
        }
    }

    /// Log the error with a message distinguishing its failure domain
    pub fn report(&self) {
        match self.domain() {
            FailureDomain::Backend => {
                if let ComputeError::Backend { code, .. } = self {
                    error!(code = *code, "Backend exception: {}", self);
                } else {
                    error!("Backend exception: {}", self);
                }
            }
            FailureDomain::Runtime => error!("Runtime exception: {}", self),
            FailureDomain::Unknown => error!("Unknown exception occurred: {}", self),
        }
    }

    /// Build an [`ComputeError::Unknown`] from a caught panic payload
    pub(crate) fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "kernel panicked".to_string()
        };
        ComputeError::Unknown(message)
    }
}

pub type Result<T> = std::result::Result<T, ComputeError>;
