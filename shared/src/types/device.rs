//! Compute device descriptors
//!
//! A [`Device`] is the immutable description of a compute unit as reported by
//! its platform. Descriptors are plain data: they carry no handle to the
//! runtime that produced them, so they can be logged, serialized and compared
//! freely.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Device-type classification reported by the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Cpu,
    Gpu,
    Accelerator,
    Other,
}

impl DeviceType {
    /// Score used by the "best available" selection policy.
    ///
    /// Higher wins. GPUs outrank dedicated accelerators, which outrank host
    /// CPUs.
    pub fn selection_score(self) -> u32 {
        match self {
            DeviceType::Gpu => 3,
            DeviceType::Accelerator => 2,
            DeviceType::Cpu => 1,
            DeviceType::Other => 0,
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DeviceType::Cpu => "CPU",
            DeviceType::Gpu => "GPU",
            DeviceType::Accelerator => "Accelerator",
            DeviceType::Other => "Other",
        };
        f.write_str(label)
    }
}

/// Runtime backend a device is driven through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    OpenCl,
    Cuda,
    LevelZero,
    NativeCpu,
    Hip,
    Unknown,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BackendKind::OpenCl => "OpenCL",
            BackendKind::Cuda => "CUDA",
            BackendKind::LevelZero => "Level Zero",
            BackendKind::NativeCpu => "Native CPU",
            BackendKind::Hip => "HIP",
            BackendKind::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Immutable description of a compute unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Human-readable device name
    pub name: String,

    /// Vendor string
    pub vendor: String,

    /// Device-type classification
    pub device_type: DeviceType,

    /// Backend the device is driven through
    pub backend: BackendKind,

    /// Name of the platform that exposes this device
    pub platform: String,

    /// Number of parallel compute units (cores, SMs, EUs...)
    pub compute_units: u32,
}

impl Device {
    /// Check whether the device has the given classification
    pub fn is(&self, device_type: DeviceType) -> bool {
        self.device_type == device_type
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.device_type, self.backend)
    }
}

/// A platform and the devices it exposes, in enumeration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInfo {
    pub name: String,
    pub devices: Vec<Device>,
}
