//! Ls command implementation

use anyhow::Result;
use std::io::Write;
use syckle_compute::PlatformRegistry;
use syckle_shared::PlatformInfo;

pub fn run(registry: &PlatformRegistry) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_listing(&registry.enumerate(), &mut out)?;
    out.flush()?;
    Ok(())
}

/// Write one block per platform with its devices indented below
pub fn write_listing<W: Write>(platforms: &[PlatformInfo], out: &mut W) -> std::io::Result<()> {
    for platform in platforms {
        writeln!(out, "Platform: {}", platform.name)?;
        for device in &platform.devices {
            writeln!(out, "  Device: {}", device.name)?;
            writeln!(out, "    Vendor: {}", device.vendor)?;
            writeln!(out, "    Type: {}", device.device_type)?;
            writeln!(out, "    Backend: {}", device.backend)?;
        }
    }
    Ok(())
}
