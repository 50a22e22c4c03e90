//! Profiling data structures
//!
//! A job is timed against two clocks: the host's monotonic clock, which sees
//! submission, transfers and the blocking wait, and the device clock, which
//! only sees the kernel's active execution window.

use crate::types::device::Device;
use crate::utils::time::{nanos_to_micros, nanos_to_millis};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dual-clock timing for a single job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilingSample {
    /// Host-observed duration (submission + execution + transfers), in ns
    pub wall_ns: u64,

    /// Device-reported execution duration, in ns
    pub device_ns: u64,
}

impl ProfilingSample {
    /// Build a sample, clamping the device duration to the wall duration.
    ///
    /// The device window is nested inside the host window, so a larger device
    /// reading can only come from clock skew between the two sources.
    pub fn new(wall_ns: u64, device_ns: u64) -> Self {
        Self {
            wall_ns,
            device_ns: device_ns.min(wall_ns),
        }
    }

    pub fn wall_us(&self) -> u64 {
        nanos_to_micros(self.wall_ns)
    }

    pub fn wall_ms(&self) -> u64 {
        nanos_to_millis(self.wall_ns)
    }

    pub fn device_us(&self) -> u64 {
        nanos_to_micros(self.device_ns)
    }

    pub fn device_ms(&self) -> u64 {
        nanos_to_millis(self.device_ns)
    }

    /// Host-side overhead: everything in the wall window that the device
    /// did not report as execution
    pub fn overhead_ns(&self) -> u64 {
        self.wall_ns.saturating_sub(self.device_ns)
    }
}

/// Kernel that produced a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelKind {
    VectorAdd,
    BoxBlur,
}

impl KernelKind {
    /// Title used in the report banner
    pub fn title(self) -> &'static str {
        match self {
            KernelKind::VectorAdd => "VECTOR ADD",
            KernelKind::BoxBlur => "BLUR",
        }
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelKind::VectorAdd => f.write_str("vector_add"),
            KernelKind::BoxBlur => f.write_str("box_blur"),
        }
    }
}

/// Problem size of a job, as shown under the timings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JobShape {
    Vector {
        elements: usize,
    },
    Image {
        width: u32,
        height: u32,
        channels: u8,
        radius: u32,
    },
}

/// Complete profiling report for one job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileReport {
    pub kernel: KernelKind,
    pub device: Device,
    pub shape: JobShape,
    pub sample: ProfilingSample,
    pub captured_at: DateTime<Utc>,
}

impl ProfileReport {
    pub fn new(kernel: KernelKind, device: Device, shape: JobShape, sample: ProfilingSample) -> Self {
        Self {
            kernel,
            device,
            shape,
            sample,
            captured_at: Utc::now(),
        }
    }
}

impl fmt::Display for ProfileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let banner = format!("=== {} PROFILING RESULTS ===", self.kernel.title());
        let s = &self.sample;

        writeln!(f, "{}", banner)?;
        writeln!(f, "Wall Clock Time (Host + Device + Transfers):")?;
        writeln!(f, "  {} nanoseconds", s.wall_ns)?;
        writeln!(f, "  {} microseconds", s.wall_us())?;
        writeln!(f, "  {} milliseconds", s.wall_ms())?;

        writeln!(f, "\nDevice Execution Time (Kernel Only):")?;
        writeln!(f, "  {} nanoseconds", s.device_ns)?;
        writeln!(f, "  {} microseconds", s.device_us())?;
        writeln!(f, "  {} milliseconds", s.device_ms())?;

        match self.shape {
            JobShape::Vector { elements } => {
                writeln!(f, "\nVector Size: {} elements", elements)?;
            }
            JobShape::Image {
                width,
                height,
                radius,
                ..
            } => {
                writeln!(
                    f,
                    "\nImage Size: {}x{} ({} pixels)",
                    width,
                    height,
                    width as u64 * height as u64
                )?;
                writeln!(f, "Blur Radius: {}", radius)?;
            }
        }

        write!(f, "{:=<width$}", "", width = banner.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::device::{BackendKind, DeviceType};

    fn host_device() -> Device {
        Device {
            name: "Host CPU".to_string(),
            vendor: "Test".to_string(),
            device_type: DeviceType::Cpu,
            backend: BackendKind::NativeCpu,
            platform: "Native CPU".to_string(),
            compute_units: 4,
        }
    }

    #[test]
    fn test_sample_unit_conversions() {
        let sample = ProfilingSample::new(12_345_678, 2_500_000);
        assert_eq!(sample.wall_us(), 12_345);
        assert_eq!(sample.wall_ms(), 12);
        assert_eq!(sample.device_us(), 2_500);
        assert_eq!(sample.device_ms(), 2);
        assert_eq!(sample.overhead_ns(), 9_845_678);
    }

    #[test]
    fn test_sample_clamps_device_to_wall() {
        let sample = ProfilingSample::new(1_000, 5_000);
        assert_eq!(sample.device_ns, 1_000);
        assert!(sample.device_ns <= sample.wall_ns);
        assert_eq!(sample.overhead_ns(), 0);
    }

    #[test]
    fn test_vector_report_layout() {
        let report = ProfileReport::new(
            KernelKind::VectorAdd,
            host_device(),
            JobShape::Vector { elements: 3 },
            ProfilingSample::new(2_000_000, 1_000),
        );
        let text = report.to_string();

        assert!(text.starts_with("=== VECTOR ADD PROFILING RESULTS ==="));
        assert!(text.contains("Wall Clock Time (Host + Device + Transfers):\n  2000000 nanoseconds\n  2000 microseconds\n  2 milliseconds"));
        assert!(text.contains("Device Execution Time (Kernel Only):\n  1000 nanoseconds\n  1 microseconds\n  0 milliseconds"));
        assert!(text.contains("Vector Size: 3 elements"));

        let footer = text.lines().last().unwrap();
        assert_eq!(footer.len(), "=== VECTOR ADD PROFILING RESULTS ===".len());
        assert!(footer.chars().all(|c| c == '='));
    }

    #[test]
    fn test_blur_report_layout() {
        let report = ProfileReport::new(
            KernelKind::BoxBlur,
            host_device(),
            JobShape::Image {
                width: 640,
                height: 480,
                channels: 3,
                radius: 2,
            },
            ProfilingSample::new(10, 5),
        );
        let text = report.to_string();

        assert!(text.starts_with("=== BLUR PROFILING RESULTS ==="));
        assert!(text.contains("Image Size: 640x480 (307200 pixels)"));
        assert!(text.contains("Blur Radius: 2"));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = ProfileReport::new(
            KernelKind::BoxBlur,
            host_device(),
            JobShape::Image {
                width: 1,
                height: 1,
                channels: 1,
                radius: 1,
            },
            ProfilingSample::new(10, 5),
        );
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["kernel"], "box_blur");
        assert_eq!(value["shape"]["kind"], "image");
        assert_eq!(value["sample"]["device_ns"], 5);
        assert_eq!(value["device"]["backend"], "native_cpu");
    }
}
