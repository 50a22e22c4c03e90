//! Device selection
//!
//! Maps a preference token to a concrete device. `gpu` and `cpu` pick the
//! first device of that type; everything else goes through the
//! "best available" policy. A missing device type is never fatal: selection
//! falls back to the best available device and logs a warning.

use crate::error::{ComputeError, Result};
use crate::platform::{ComputeDevice, PlatformRegistry};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use syckle_shared::DeviceType;
use tracing::{info, warn};

/// Device preference as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DevicePreference {
    #[default]
    Auto,
    Gpu,
    Cpu,
    Accelerator,
}

impl DevicePreference {
    /// Device type requested explicitly, if any.
    ///
    /// `accelerator` deliberately resolves through the generic policy.
    pub fn requested_type(self) -> Option<DeviceType> {
        match self {
            DevicePreference::Gpu => Some(DeviceType::Gpu),
            DevicePreference::Cpu => Some(DeviceType::Cpu),
            DevicePreference::Auto | DevicePreference::Accelerator => None,
        }
    }
}

impl FromStr for DevicePreference {
    type Err = std::convert::Infallible;

    /// Unrecognised tokens map to `Auto`
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "gpu" => DevicePreference::Gpu,
            "cpu" => DevicePreference::Cpu,
            "accelerator" => DevicePreference::Accelerator,
            _ => DevicePreference::Auto,
        })
    }
}

impl fmt::Display for DevicePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            DevicePreference::Auto => "auto",
            DevicePreference::Gpu => "gpu",
            DevicePreference::Cpu => "cpu",
            DevicePreference::Accelerator => "accelerator",
        };
        f.write_str(token)
    }
}

/// Outcome of device resolution
#[derive(Debug, Clone)]
pub struct Selection {
    pub device: Arc<dyn ComputeDevice>,

    /// True when the requested type was absent and the default was used
    pub fell_back: bool,
}

/// The "best available" device: highest type score, first one on ties
pub fn default_device(registry: &PlatformRegistry) -> Option<Arc<dyn ComputeDevice>> {
    let mut best: Option<Arc<dyn ComputeDevice>> = None;
    for device in registry.devices() {
        let score = device.descriptor().device_type.selection_score();
        let better = best
            .as_ref()
            .map_or(true, |b| score > b.descriptor().device_type.selection_score());
        if better {
            best = Some(device);
        }
    }
    best
}

/// First device of the given type in enumeration order
pub fn first_of_type(
    registry: &PlatformRegistry,
    device_type: DeviceType,
) -> Option<Arc<dyn ComputeDevice>> {
    registry
        .devices()
        .into_iter()
        .find(|d| d.descriptor().is(device_type))
}

/// Resolve a preference to a device, falling back to the default device
pub fn resolve_device(
    registry: &PlatformRegistry,
    preference: DevicePreference,
) -> Result<Selection> {
    let requested = preference
        .requested_type()
        .and_then(|t| first_of_type(registry, t));

    let selection = match (preference.requested_type(), requested) {
        (_, Some(device)) => Selection {
            device,
            fell_back: false,
        },
        (Some(missing), None) => {
            let device = default_device(registry).ok_or_else(|| ComputeError::DeviceUnavailable {
                requested: preference.to_string(),
            })?;
            warn!(
                requested = %missing,
                fallback = %device.descriptor().name,
                "No {} device found, falling back to default device",
                missing
            );
            Selection {
                device,
                fell_back: true,
            }
        }
        (None, None) => Selection {
            device: default_device(registry).ok_or_else(|| ComputeError::DeviceUnavailable {
                requested: preference.to_string(),
            })?,
            fell_back: false,
        },
    };

    info!(
        preference = %preference,
        "Using Device: {}",
        selection.device.descriptor().name
    );

    Ok(selection)
}
