//! Interleaved 8-bit image buffer
//!
//! Pixels are stored row-major with channels interleaved, i.e. the byte for
//! pixel `(y, x)` channel `c` lives at `(y * width + x) * channels + c`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of interleaved channels (RGBA)
pub const MAX_CHANNELS: u8 = 4;

/// Errors raised when constructing an [`Image`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    #[error("unsupported channel count {0} (expected 1-4)")]
    UnsupportedChannels(u8),

    #[error("image data is {actual} bytes, expected {expected} for {width}x{height}x{channels}")]
    LengthMismatch {
        width: u32,
        height: u32,
        channels: u8,
        expected: usize,
        actual: usize,
    },
}

/// Row-major, interleaved-channel image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl Image {
    /// Wrap an existing pixel buffer, validating its length
    pub fn from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self, ImageError> {
        if channels == 0 || channels > MAX_CHANNELS {
            return Err(ImageError::UnsupportedChannels(channels));
        }

        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(ImageError::LengthMismatch {
                width,
                height,
                channels,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Create an image where every byte has the same value
    pub fn filled(width: u32, height: u32, channels: u8, value: u8) -> Result<Self, ImageError> {
        let len = width as usize * height as usize * channels as usize;
        Self::from_raw(width, height, channels, vec![value; len])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Number of pixels (`width * height`)
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Bytes per row (`width * channels`)
    pub fn row_len(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Check whether another image has identical geometry
    pub fn same_shape(&self, other: &Image) -> bool {
        self.width == other.width && self.height == other.height && self.channels == other.channels
    }
}
