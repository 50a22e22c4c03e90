//! Native CPU platform
//!
//! Exposes the host processor as a single CPU device. Jobs run on a dedicated
//! rayon pool so that submission returns immediately and the host thread
//! blocks only in [`Event::wait`](crate::event::Event::wait).

use crate::config::RuntimeConfig;
use crate::error::{ComputeError, Result};
use crate::event::{Completion, DeviceClock, Event, ExecutionRecord};
use crate::kernel::KernelJob;
use crate::platform::{ComputeDevice, Platform};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use syckle_shared::{BackendKind, Device, DeviceType};
use sysinfo::{CpuRefreshKind, RefreshKind, System};
use tracing::{debug, info};

pub const HOST_PLATFORM_NAME: &str = "Native CPU";

/// Platform wrapping the host processor
#[derive(Debug)]
pub struct HostPlatform {
    device: Arc<HostDevice>,
}

impl HostPlatform {
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        Ok(Self {
            device: Arc::new(HostDevice::new(config.resolved_worker_threads())?),
        })
    }
}

impl Platform for HostPlatform {
    fn name(&self) -> &str {
        HOST_PLATFORM_NAME
    }

    fn devices(&self) -> Vec<Arc<dyn ComputeDevice>> {
        vec![self.device.clone() as Arc<dyn ComputeDevice>]
    }
}

/// The host CPU driven through a rayon worker pool
pub struct HostDevice {
    descriptor: Device,
    pool: rayon::ThreadPool,
    clock: DeviceClock,
}

impl std::fmt::Debug for HostDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostDevice")
            .field("descriptor", &self.descriptor)
            .field("workers", &self.pool.current_num_threads())
            .finish()
    }
}

impl HostDevice {
    /// Start a device backed by `workers` threads
    pub fn new(workers: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("syckle-cpu-{}", i))
            .build()
            .map_err(|e| ComputeError::Backend {
                code: -6,
                message: format!("failed to start host worker pool: {}", e),
            })?;

        let (name, vendor) = host_cpu_identity();
        let descriptor = Device {
            name,
            vendor,
            device_type: DeviceType::Cpu,
            backend: BackendKind::NativeCpu,
            platform: HOST_PLATFORM_NAME.to_string(),
            compute_units: u32::try_from(pool.current_num_threads()).unwrap_or(u32::MAX),
        };

        info!(
            device = %descriptor.name,
            workers = pool.current_num_threads(),
            "Host device initialized"
        );

        Ok(Self {
            descriptor,
            pool,
            clock: DeviceClock::new(),
        })
    }
}

impl ComputeDevice for HostDevice {
    fn descriptor(&self) -> &Device {
        &self.descriptor
    }

    fn enqueue(&self, job: KernelJob) -> Result<Event> {
        let (signal, event) = Event::channel(&self.descriptor.name);
        let clock = self.clock;
        let queued_ns = clock.now_ns();
        let kind = job.kind();

        debug!(kernel = %kind, range = %job.range(), "enqueue on host pool");

        self.pool.spawn(move || {
            let mut job = job;
            let submit_ns = clock.now_ns();
            let start_ns = clock.now_ns();
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| job.execute()));
            let end_ns = clock.now_ns();

            let result = match outcome {
                Ok(()) => Ok(Completion {
                    job,
                    record: ExecutionRecord {
                        queued_ns,
                        submit_ns,
                        start_ns,
                        end_ns,
                    },
                }),
                Err(payload) => Err(ComputeError::from_panic(payload)),
            };
            signal.complete(result);
        });

        Ok(event)
    }
}

/// Best-effort processor name and vendor
fn host_cpu_identity() -> (String, String) {
    let sys = System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::new()));
    cpu_identity(sys.cpus().first().map(|cpu| (cpu.brand(), cpu.vendor_id())))
}

/// Fill in whatever the OS did not report
fn cpu_identity(reported: Option<(&str, &str)>) -> (String, String) {
    let (brand, vendor) = reported.unwrap_or_default();
    let name = non_empty(brand)
        .unwrap_or_else(|| format!("Host CPU ({})", std::env::consts::ARCH));
    let vendor = non_empty(vendor).unwrap_or_else(|| "Unknown".to_string());
    (name, vendor)
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
