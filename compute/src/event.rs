//! Completion events and device-side execution records

use crate::error::{ComputeError, Result};
use crate::kernel::KernelJob;
use std::sync::mpsc;
use std::time::Instant;
use syckle_shared::utils::time::monotonic_nanos_since;

/// Monotonic clock owned by a device; timestamps are ns since device creation
#[derive(Debug, Clone, Copy)]
pub struct DeviceClock {
    epoch: Instant,
}

impl DeviceClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    pub fn now_ns(&self) -> u64 {
        monotonic_nanos_since(self.epoch)
    }
}

impl Default for DeviceClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Device-clock timestamps for one command, in nanoseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecutionRecord {
    /// Command handed to the device
    pub queued_ns: u64,
    /// Device picked the command up
    pub submit_ns: u64,
    /// Kernel started executing
    pub start_ns: u64,
    /// Kernel finished executing
    pub end_ns: u64,
}

impl ExecutionRecord {
    /// Device-reported execution time (`end - start`)
    pub fn execution_ns(&self) -> u64 {
        self.end_ns.saturating_sub(self.start_ns)
    }

    /// Time between enqueue and kernel start
    pub fn latency_ns(&self) -> u64 {
        self.start_ns.saturating_sub(self.queued_ns)
    }
}

/// A finished job: the buffers come back to the host with the record
#[derive(Debug)]
pub struct Completion {
    pub job: KernelJob,
    pub record: ExecutionRecord,
}

/// Device-side half of an event
#[derive(Debug)]
pub struct EventSignal {
    sender: mpsc::SyncSender<Result<Completion>>,
}

impl EventSignal {
    /// Report the job's outcome to the waiting host
    pub fn complete(self, outcome: Result<Completion>) {
        // A dropped Event means nobody is waiting any more
        let _ = self.sender.send(outcome);
    }
}

/// Host-side handle to an in-flight job
#[derive(Debug)]
pub struct Event {
    device: String,
    receiver: mpsc::Receiver<Result<Completion>>,
}

impl Event {
    /// Create a connected signal/event pair for a job on `device`
    pub fn channel(device: &str) -> (EventSignal, Event) {
        let (sender, receiver) = mpsc::sync_channel(1);
        (
            EventSignal { sender },
            Event {
                device: device.to_string(),
                receiver,
            },
        )
    }

    /// Block until the device reports completion.
    ///
    /// There is no timeout: a device that never signals blocks forever.
    pub fn wait(self) -> Result<Completion> {
        match self.receiver.recv() {
            Ok(outcome) => outcome,
            Err(_) => Err(ComputeError::Backend {
                code: -1,
                message: format!(
                    "device '{}' dropped the job without signalling completion",
                    self.device
                ),
            }),
        }
    }
}
