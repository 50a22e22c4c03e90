//! Kernel jobs
//!
//! A [`KernelJob`] bundles one data-parallel kernel with the buffers it reads
//! and writes. Jobs are validated before they reach a device: every buffer
//! must be bound with exactly the shape the kernel iterates over.

pub mod blur;
pub mod vector_add;

use crate::buffer::{AccessMode, Buffer};
use crate::error::{ComputeError, Result};
use std::fmt;
use syckle_shared::KernelKind;

/// Iteration range / buffer shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NdRange {
    D1(usize),
    D2 { rows: usize, cols: usize },
}

impl NdRange {
    /// Total number of elements covered by the range
    pub fn len(&self) -> usize {
        match *self {
            NdRange::D1(n) => n,
            NdRange::D2 { rows, cols } => rows * cols,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for NdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NdRange::D1(n) => write!(f, "[{}]", n),
            NdRange::D2 { rows, cols } => write!(f, "[{} x {}]", rows, cols),
        }
    }
}

/// Shape of an interleaved image as seen by the blur kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageGeometry {
    pub height: usize,
    pub width: usize,
    pub channels: usize,
}

impl ImageGeometry {
    /// Shape of the backing buffer: one row per image row
    pub fn buffer_range(&self) -> NdRange {
        NdRange::D2 {
            rows: self.height,
            cols: self.width * self.channels,
        }
    }

    /// Iteration grid: one work-item per pixel
    pub fn grid(&self) -> NdRange {
        NdRange::D2 {
            rows: self.height,
            cols: self.width,
        }
    }
}

/// A kernel together with its bound buffers
#[derive(Debug)]
pub enum KernelJob {
    VectorAdd {
        a: Buffer<i32>,
        b: Buffer<i32>,
        c: Buffer<i32>,
    },
    Blur {
        input: Buffer<u8>,
        output: Buffer<u8>,
        geometry: ImageGeometry,
        radius: u32,
    },
}

impl KernelJob {
    /// Bind the three vector-add buffers, checking they share one 1D range
    pub fn vector_add(a: Buffer<i32>, b: Buffer<i32>, c: Buffer<i32>) -> Result<Self> {
        let job = KernelJob::VectorAdd { a, b, c };
        job.validate()?;
        Ok(job)
    }

    /// Bind the blur input/output buffers to an image geometry
    pub fn blur(
        input: Buffer<u8>,
        output: Buffer<u8>,
        geometry: ImageGeometry,
        radius: u32,
    ) -> Result<Self> {
        let job = KernelJob::Blur {
            input,
            output,
            geometry,
            radius,
        };
        job.validate()?;
        Ok(job)
    }

    pub fn kind(&self) -> KernelKind {
        match self {
            KernelJob::VectorAdd { .. } => KernelKind::VectorAdd,
            KernelJob::Blur { .. } => KernelKind::BoxBlur,
        }
    }

    /// The range the kernel iterates over
    pub fn range(&self) -> NdRange {
        match self {
            KernelJob::VectorAdd { a, .. } => NdRange::D1(a.len()),
            KernelJob::Blur { geometry, .. } => geometry.grid(),
        }
    }

    /// Check every buffer against the kernel's range and access needs
    pub fn validate(&self) -> Result<()> {
        match self {
            KernelJob::VectorAdd { a, b, c } => {
                if a.len() != b.len() {
                    return Err(ComputeError::SizeMismatch {
                        a: a.len(),
                        b: b.len(),
                    });
                }
                let range = NdRange::D1(a.len());
                a.bind(range, AccessMode::ReadOnly)?;
                b.bind(range, AccessMode::ReadOnly)?;
                c.bind(range, AccessMode::WriteOnly)
            }
            KernelJob::Blur {
                input,
                output,
                geometry,
                ..
            } => {
                if geometry.channels == 0 {
                    return Err(ComputeError::Runtime(
                        "blur requires at least one channel".to_string(),
                    ));
                }
                let range = geometry.buffer_range();
                input.bind(range, AccessMode::ReadOnly)?;
                output.bind(range, AccessMode::WriteOnly)
            }
        }
    }

    /// Run the kernel body on the calling thread's rayon pool.
    ///
    /// Devices call this from their own workers after the job has been
    /// validated.
    pub fn execute(&mut self) {
        match self {
            KernelJob::VectorAdd { a, b, c } => {
                vector_add::vector_add(a.as_slice(), b.as_slice(), c.as_mut_slice());
            }
            KernelJob::Blur {
                input,
                output,
                geometry,
                radius,
            } => {
                blur::box_blur(input.as_slice(), output.as_mut_slice(), *geometry, *radius);
            }
        }
    }
}
