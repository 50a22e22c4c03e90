//! Platform layer
//!
//! A [`Platform`] is one runtime exposing a set of [`ComputeDevice`]s. The
//! [`PlatformRegistry`] keeps platforms in discovery order; that order is what
//! "first device of a type" means during selection.

pub mod host;

use crate::config::RuntimeConfig;
use crate::error::Result;
use crate::event::Event;
use crate::kernel::KernelJob;
use std::fmt;
use std::sync::Arc;
use syckle_shared::{Device, PlatformInfo};
use tracing::debug;

pub use host::{HostDevice, HostPlatform};

/// A device able to run kernel jobs
pub trait ComputeDevice: fmt::Debug + Send + Sync {
    /// Immutable descriptor for this device
    fn descriptor(&self) -> &Device;

    /// Hand a validated job to the device.
    ///
    /// Returns as soon as the device has accepted the job; the returned
    /// [`Event`] resolves when execution finishes.
    fn enqueue(&self, job: KernelJob) -> Result<Event>;
}

/// A runtime exposing a group of devices
pub trait Platform: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Devices in enumeration order
    fn devices(&self) -> Vec<Arc<dyn ComputeDevice>>;
}

/// Known platforms, in discovery order
#[derive(Debug, Default, Clone)]
pub struct PlatformRegistry {
    platforms: Vec<Arc<dyn Platform>>,
}

impl PlatformRegistry {
    /// A registry with no platforms
    pub fn empty() -> Self {
        Self::default()
    }

    /// Register the built-in platforms
    pub fn discover(config: &RuntimeConfig) -> Result<Self> {
        let host = HostPlatform::new(config)?;
        let registry = Self::empty().with_platform(Arc::new(host));
        debug!(
            platforms = registry.platforms.len(),
            devices = registry.devices().len(),
            "platform discovery complete"
        );
        Ok(registry)
    }

    /// Append a platform after the existing ones
    pub fn with_platform(mut self, platform: Arc<dyn Platform>) -> Self {
        self.platforms.push(platform);
        self
    }

    pub fn platforms(&self) -> &[Arc<dyn Platform>] {
        &self.platforms
    }

    /// All devices across all platforms, in enumeration order
    pub fn devices(&self) -> Vec<Arc<dyn ComputeDevice>> {
        self.platforms.iter().flat_map(|p| p.devices()).collect()
    }

    /// Describe every platform and its devices.
    ///
    /// Pure query: nothing is selected or initialised.
    pub fn enumerate(&self) -> Vec<PlatformInfo> {
        self.platforms
            .iter()
            .map(|platform| PlatformInfo {
                name: platform.name().to_string(),
                devices: platform
                    .devices()
                    .iter()
                    .map(|d| d.descriptor().clone())
                    .collect(),
            })
            .collect()
    }
}
