//! PNG images
//!
//! Images are decoded to 8 bits per channel. Palette and low bit-depth
//! images are expanded, 16-bit images are stripped to 8 bits.

use super::{stage, StagedFile};
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use syckle_shared::Image;
use tracing::debug;

/// Load a PNG file into an [`Image`]
pub fn load_png(path: &Path) -> Result<Image> {
    let file = File::open(path)
        .with_context(|| format!("Failed to load image: {}", path.display()))?;

    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .with_context(|| format!("Failed to load image: {}", path.display()))?;
    let mut data = vec![0u8; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut data)
        .with_context(|| format!("Failed to decode image: {}", path.display()))?;
    data.truncate(frame.buffer_size());

    if frame.bit_depth != png::BitDepth::Eight {
        bail!("unsupported bit depth {:?} in {}", frame.bit_depth, path.display());
    }

    let channels = channel_count(frame.color_type)?;
    debug!(
        width = frame.width,
        height = frame.height,
        channels,
        "decoded {}",
        path.display()
    );

    Image::from_raw(frame.width, frame.height, channels, data)
        .with_context(|| format!("Invalid image data in {}", path.display()))
}

/// Stage an [`Image`] as an 8-bit PNG
pub fn stage_png(path: &Path, image: &Image) -> Result<StagedFile> {
    let color = color_type(image.channels())?;

    stage(path, |w| {
        let mut encoder = png::Encoder::new(&mut *w, image.width(), image.height());
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header().context("Failed to write PNG header")?;
        writer
            .write_image_data(image.as_bytes())
            .context("Failed to encode PNG data")?;
        writer.finish().context("Failed to finish PNG stream")?;
        Ok(())
    })
    .with_context(|| format!("Failed to write image: {}", path.display()))
}

fn channel_count(color: png::ColorType) -> Result<u8> {
    Ok(match color {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        png::ColorType::Indexed => bail!("palette image was not expanded"),
    })
}

fn color_type(channels: u8) -> Result<png::ColorType> {
    Ok(match channels {
        1 => png::ColorType::Grayscale,
        2 => png::ColorType::GrayscaleAlpha,
        3 => png::ColorType::Rgb,
        4 => png::ColorType::Rgba,
        n => bail!("cannot encode an image with {} channels", n),
    })
}
