//! Compute dispatch and profiling for SYCkLe
//!
//! Selects a compute device, stages host data into device buffers, runs one
//! data-parallel kernel (vector add or box blur) per queue, and records
//! wall-clock and device-reported execution time for the job.
//!
//! ```rust,ignore
//! use syckle_compute::{dispatch, DevicePreference, PlatformRegistry, RuntimeConfig};
//!
//! let registry = PlatformRegistry::discover(&RuntimeConfig::default())?;
//! let out = dispatch::vector_add(&registry, DevicePreference::Auto, &[1, 2, 3], &[4, 5, 6])?;
//! assert_eq!(out.output, vec![5, 7, 9]);
//! println!("{}", out.report);
//! ```

pub mod buffer;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod kernel;
pub mod platform;
pub mod profiling;
pub mod queue;
pub mod selector;

pub use buffer::{AccessMode, Buffer};
pub use config::RuntimeConfig;
pub use dispatch::JobOutput;
pub use error::{ComputeError, FailureDomain, Result};
pub use event::{Completion, DeviceClock, Event, EventSignal, ExecutionRecord};
pub use kernel::{ImageGeometry, KernelJob, NdRange};
pub use platform::{ComputeDevice, Platform, PlatformRegistry};
pub use profiling::ProfilingRecorder;
pub use queue::{ComputeQueue, QueueState};
pub use selector::{resolve_device, DevicePreference, Selection};
