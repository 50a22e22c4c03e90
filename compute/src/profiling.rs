//! Dual-clock profiling
//!
//! The host window opens right before buffers are staged and submitted and
//! closes when the blocking wait returns. The device window comes from the
//! completed job's [`ExecutionRecord`].

use crate::event::ExecutionRecord;
use std::time::Instant;
use syckle_shared::utils::time::duration_nanos;
use syckle_shared::ProfilingSample;
use tracing::debug;

/// Captures one [`ProfilingSample`] per job
#[derive(Debug)]
pub struct ProfilingRecorder {
    started: Instant,
}

impl ProfilingRecorder {
    /// Open the host-side window
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Close the host-side window and combine it with the device record
    pub fn finish(self, record: &ExecutionRecord) -> ProfilingSample {
        let wall_ns = duration_nanos(self.started.elapsed());
        let device_ns = record.execution_ns();

        if device_ns > wall_ns {
            debug!(wall_ns, device_ns, "device window exceeds host window, clamping");
        }

        let sample = ProfilingSample::new(wall_ns, device_ns);
        debug!(
            wall_ns = sample.wall_ns,
            device_ns = sample.device_ns,
            overhead_ns = sample.overhead_ns(),
            latency_ns = record.latency_ns(),
            "profiling sample"
        );
        sample
    }
}
