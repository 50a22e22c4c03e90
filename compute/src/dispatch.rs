//! High-level operations
//!
//! Each operation runs the full protocol against a fresh queue: resolve the
//! device, stage inputs in, submit, wait, stage outputs out. Nothing is
//! returned unless every step succeeded, and every failure passes through
//! [`ComputeError::report`] exactly once.

use crate::buffer::Buffer;
use crate::error::{ComputeError, Result};
use crate::kernel::{ImageGeometry, KernelJob, NdRange};
use crate::platform::PlatformRegistry;
use crate::profiling::ProfilingRecorder;
use crate::queue::ComputeQueue;
use crate::selector::{resolve_device, DevicePreference};
use syckle_shared::{Image, JobShape, KernelKind, ProfileReport};
use tracing::info;

/// Result of a successful job together with its profiling report
#[derive(Debug, Clone)]
pub struct JobOutput<T> {
    pub output: T,
    pub report: ProfileReport,

    /// True when the requested device type was absent
    pub fell_back: bool,
}

/// Elementwise `a + b` on the preferred device
pub fn vector_add(
    registry: &PlatformRegistry,
    preference: DevicePreference,
    a: &[i32],
    b: &[i32],
) -> Result<JobOutput<Vec<i32>>> {
    run_vector_add(registry, preference, a, b).map_err(|e| {
        e.report();
        e
    })
}

/// Box blur of `image` with the given radius on the preferred device
pub fn box_blur(
    registry: &PlatformRegistry,
    preference: DevicePreference,
    image: &Image,
    radius: u32,
) -> Result<JobOutput<Image>> {
    run_box_blur(registry, preference, image, radius).map_err(|e| {
        e.report();
        e
    })
}

fn run_vector_add(
    registry: &PlatformRegistry,
    preference: DevicePreference,
    a: &[i32],
    b: &[i32],
) -> Result<JobOutput<Vec<i32>>> {
    // Checked before any device work
    if a.len() != b.len() {
        return Err(ComputeError::SizeMismatch {
            a: a.len(),
            b: b.len(),
        });
    }

    let selection = resolve_device(registry, preference)?;
    let mut queue = ComputeQueue::new(selection.device);
    let range = NdRange::D1(a.len());

    let recorder = ProfilingRecorder::start();
    let job = KernelJob::vector_add(
        Buffer::stage_in("a", a, range)?,
        Buffer::stage_in("b", b, range)?,
        Buffer::allocate("c", range),
    )?;
    let event = queue.submit(job)?;
    let completion = queue.wait(event)?;
    let sample = recorder.finish(&completion.record);

    let mut c = vec![0; a.len()];
    match completion.job {
        KernelJob::VectorAdd { c: out, .. } => out.stage_out(&mut c)?,
        other => return Err(unexpected_job(KernelKind::VectorAdd, other.kind())),
    }

    let report = ProfileReport::new(
        KernelKind::VectorAdd,
        queue.device().clone(),
        JobShape::Vector { elements: c.len() },
        sample,
    );
    info!(
        kernel = %report.kernel,
        elements = c.len(),
        wall_ns = sample.wall_ns,
        device_ns = sample.device_ns,
        "Job complete"
    );

    Ok(JobOutput {
        output: c,
        report,
        fell_back: selection.fell_back,
    })
}

fn run_box_blur(
    registry: &PlatformRegistry,
    preference: DevicePreference,
    image: &Image,
    radius: u32,
) -> Result<JobOutput<Image>> {
    let geometry = ImageGeometry {
        height: image.height() as usize,
        width: image.width() as usize,
        channels: image.channels() as usize,
    };

    let selection = resolve_device(registry, preference)?;
    let mut queue = ComputeQueue::new(selection.device);
    let range = geometry.buffer_range();

    info!(
        "Image: {}x{} with {} channels, blur radius: {}",
        image.width(),
        image.height(),
        image.channels(),
        radius
    );

    let recorder = ProfilingRecorder::start();
    let job = KernelJob::blur(
        Buffer::stage_in("input", image.as_bytes(), range)?,
        Buffer::allocate("output", range),
        geometry,
        radius,
    )?;
    let event = queue.submit(job)?;
    let completion = queue.wait(event)?;
    let sample = recorder.finish(&completion.record);

    let mut data = vec![0u8; range.len()];
    match completion.job {
        KernelJob::Blur { output, .. } => output.stage_out(&mut data)?,
        other => return Err(unexpected_job(KernelKind::BoxBlur, other.kind())),
    }
    let blurred = Image::from_raw(image.width(), image.height(), image.channels(), data)?;

    let report = ProfileReport::new(
        KernelKind::BoxBlur,
        queue.device().clone(),
        JobShape::Image {
            width: image.width(),
            height: image.height(),
            channels: image.channels(),
            radius,
        },
        sample,
    );
    info!(
        kernel = %report.kernel,
        pixels = image.pixel_count(),
        wall_ns = sample.wall_ns,
        device_ns = sample.device_ns,
        "Job complete"
    );

    Ok(JobOutput {
        output: blurred,
        report,
        fell_back: selection.fell_back,
    })
}

fn unexpected_job(expected: KernelKind, actual: KernelKind) -> ComputeError {
    ComputeError::Runtime(format!(
        "device returned a {} job for a {} submission",
        actual, expected
    ))
}
