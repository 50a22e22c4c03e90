//! Host/device staging buffers
//!
//! A [`Buffer`] owns a device-side copy of a host array for the lifetime of a
//! single job. Data moves explicitly: [`Buffer::stage_in`] copies host data
//! in, the buffer is moved into the job at submission, and
//! [`Buffer::stage_out`] copies results back once the wait has returned.

use crate::error::{ComputeError, Result};
use crate::kernel::NdRange;
use tracing::debug;

/// How a kernel accesses a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    ReadOnly,
    WriteOnly,
}

/// Device-side storage bound to one kernel submission
#[derive(Debug)]
pub struct Buffer<T> {
    name: &'static str,
    data: Vec<T>,
    range: NdRange,
    access: AccessMode,
}

impl<T: Copy + Default> Buffer<T> {
    /// Copy a host array into a new read-only buffer of the given shape
    pub fn stage_in(name: &'static str, host: &[T], range: NdRange) -> Result<Self> {
        if host.len() != range.len() {
            return Err(ComputeError::ShapeMismatch {
                buffer: name,
                expected: range.to_string(),
                actual: format!("[{}]", host.len()),
            });
        }

        debug!(
            buffer = name,
            bytes = std::mem::size_of_val(host),
            "host -> device {}",
            range
        );

        Ok(Self {
            name,
            data: host.to_vec(),
            range,
            access: AccessMode::ReadOnly,
        })
    }

    /// Allocate a zeroed write-only buffer of the given shape
    pub fn allocate(name: &'static str, range: NdRange) -> Self {
        Self {
            name,
            data: vec![T::default(); range.len()],
            range,
            access: AccessMode::WriteOnly,
        }
    }

    /// Copy device contents back into a host array of identical length
    pub fn stage_out(&self, host: &mut [T]) -> Result<()> {
        if self.access != AccessMode::WriteOnly {
            return Err(ComputeError::Runtime(format!(
                "buffer '{}' is read-only and cannot be staged out",
                self.name
            )));
        }

        if host.len() != self.data.len() {
            return Err(ComputeError::ShapeMismatch {
                buffer: self.name,
                expected: self.range.to_string(),
                actual: format!("[{}]", host.len()),
            });
        }

        host.copy_from_slice(&self.data);

        debug!(
            buffer = self.name,
            bytes = std::mem::size_of_val(host),
            "device -> host {}",
            self.range
        );

        Ok(())
    }
}

impl<T> Buffer<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn range(&self) -> NdRange {
        self.range
    }

    pub fn access(&self) -> AccessMode {
        self.access
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check that the buffer was bound with exactly the kernel's range and
    /// the access mode the kernel needs
    pub(crate) fn bind(&self, expected: NdRange, access: AccessMode) -> Result<()> {
        if self.range != expected {
            return Err(ComputeError::ShapeMismatch {
                buffer: self.name,
                expected: expected.to_string(),
                actual: self.range.to_string(),
            });
        }

        if self.access != access {
            return Err(ComputeError::Backend {
                code: -34,
                message: format!(
                    "buffer '{}' bound as {:?}, kernel requires {:?}",
                    self.name, self.access, access
                ),
            });
        }

        Ok(())
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}
