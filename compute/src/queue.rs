//! Compute queue
//!
//! A queue is bound to one device for its whole life and accepts exactly one
//! job. Submitting a second job requires a new queue.

use crate::error::{ComputeError, Result};
use crate::event::{Completion, Event};
use crate::kernel::KernelJob;
use crate::platform::ComputeDevice;
use std::sync::Arc;
use syckle_shared::Device;
use tracing::debug;

/// Lifecycle of a queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueState {
    Bound,
    JobSubmitted,
    Completed,
    Failed,
}

/// Execution context bound to a single device, with profiling enabled
#[derive(Debug)]
pub struct ComputeQueue {
    device: Arc<dyn ComputeDevice>,
    state: QueueState,
}

impl ComputeQueue {
    pub fn new(device: Arc<dyn ComputeDevice>) -> Self {
        debug!(device = %device.descriptor().name, "queue bound");
        Self {
            device,
            state: QueueState::Bound,
        }
    }

    pub fn device(&self) -> &Device {
        self.device.descriptor()
    }

    pub fn state(&self) -> QueueState {
        self.state
    }

    /// Always true: every queue records device timestamps
    pub fn profiling_enabled(&self) -> bool {
        true
    }

    /// Validate and hand the job to the device
    pub fn submit(&mut self, job: KernelJob) -> Result<Event> {
        if self.state != QueueState::Bound {
            return Err(ComputeError::QueueConsumed {
                device: self.device().name.clone(),
            });
        }

        let outcome = job.validate().and_then(|()| {
            debug!(kernel = %job.kind(), range = %job.range(), "submit");
            self.device.enqueue(job)
        });

        self.transition(match outcome {
            Ok(_) => QueueState::JobSubmitted,
            Err(_) => QueueState::Failed,
        });
        outcome
    }

    /// Block until the submitted job finishes
    pub fn wait(&mut self, event: Event) -> Result<Completion> {
        if self.state != QueueState::JobSubmitted {
            return Err(ComputeError::Runtime(format!(
                "wait called on a queue in state {:?}",
                self.state
            )));
        }

        let outcome = event.wait();
        self.transition(match outcome {
            Ok(_) => QueueState::Completed,
            Err(_) => QueueState::Failed,
        });
        outcome
    }

    fn transition(&mut self, next: QueueState) {
        debug!(from = ?self.state, to = ?next, "queue state");
        self.state = next;
    }
}
