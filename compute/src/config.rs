//! Runtime configuration for the compute engine

use serde::{Deserialize, Serialize};

/// Upper bound on host worker threads
pub const MAX_WORKER_THREADS: usize = 1024;

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Worker threads for the host CPU device (0 = one per logical core)
    pub worker_threads: usize,
}

impl RuntimeConfig {
    /// Number of host workers after resolving the `0 = auto` default
    pub fn resolved_worker_threads(&self) -> usize {
        if self.worker_threads == 0 {
            num_cpus::get().max(1)
        } else {
            self.worker_threads
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.worker_threads > MAX_WORKER_THREADS {
            return Err(format!(
                "worker_threads too high ({} > {})",
                self.worker_threads, MAX_WORKER_THREADS
            ));
        }
        Ok(())
    }
}
