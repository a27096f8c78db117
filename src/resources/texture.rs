//! CPU-side texture data
//!
//! Decoded RGBA pixels plus dimensions. Decoding failures are setup-fatal:
//! they surface as an error the caller propagates out of scene
//! construction.

use std::path::Path;

use crate::errors::{Result, WhirlError};

/// Decoded image data, always 8-bit RGBA.
#[derive(Debug, Clone)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureData {
    /// Wraps raw RGBA pixels, checking the byte count.
    pub fn from_pixels(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(WhirlError::ImageDecodeError(format!(
                "pixel buffer holds {} bytes, expected {expected} for {width}x{height} RGBA",
                rgba.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Loads and decodes an image file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let image = image::open(path.as_ref())?.to_rgba8();
        let (width, height) = image.dimensions();
        Ok(Self {
            width,
            height,
            rgba: image.into_raw(),
        })
    }

    /// Procedural checkerboard, used by demos in place of an image file.
    #[must_use]
    pub fn checkerboard(size: u32, cells: u32, light: [u8; 4], dark: [u8; 4]) -> Self {
        let cell_size = (size / cells.max(1)).max(1);
        let mut rgba = Vec::with_capacity(size as usize * size as usize * 4);
        for y in 0..size {
            for x in 0..size {
                let even = ((x / cell_size) + (y / cell_size)) % 2 == 0;
                rgba.extend_from_slice(if even { &light } else { &dark });
            }
        }
        Self {
            width: size,
            height: size,
            rgba,
        }
    }
}
