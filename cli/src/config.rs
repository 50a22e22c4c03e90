//! CLI configuration
//!
//! Settings are merged in increasing priority: built-in defaults, the TOML
//! file given with `--config`, then environment/command-line flags (clap
//! reads `SYCKLE_DEVICE` and `SYCKLE_THREADS` itself).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use syckle_compute::{DevicePreference, RuntimeConfig};

/// Device used when nothing else is configured
pub const DEFAULT_DEVICE: DevicePreference = DevicePreference::Gpu;

/// Contents of a `syckle.toml` file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Device preference token (auto, gpu, cpu, accelerator)
    pub device: Option<String>,

    /// Host worker threads (0 = one per core)
    pub worker_threads: Option<usize>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Resolved settings shared by every command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub device: DevicePreference,
    pub runtime: RuntimeConfig,
}

impl Settings {
    /// Merge file values with flag/env overrides
    pub fn resolve(
        file: Option<FileConfig>,
        device: Option<DevicePreference>,
        threads: Option<usize>,
    ) -> Self {
        let file = file.unwrap_or_default();

        let device = device
            .or_else(|| {
                file.device
                    .as_deref()
                    .and_then(|token| token.parse::<DevicePreference>().ok())
            })
            .unwrap_or(DEFAULT_DEVICE);

        let worker_threads = threads.or(file.worker_threads).unwrap_or(0);

        Self {
            device,
            runtime: RuntimeConfig { worker_threads },
        }
    }

    /// Validate settings
    pub fn validate(&self) -> Result<()> {
        self.runtime
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid runtime configuration: {}", e))
    }
}
