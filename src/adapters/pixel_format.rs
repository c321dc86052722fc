//! Pixel format conversion for presentation adapters.

use std::{error::Error, fmt};

use crate::core::data::colour::Colour;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormatError {
    RgbNotPixelAligned { len: usize },
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RgbNotPixelAligned { len } => {
                write!(f, "rgb length {} is not a multiple of 3", len)
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "rgba length {} does not match expected {}", actual, expected)
            }
        }
    }
}

impl Error for PixelFormatError {}

/// Copies packed RGB into an RGBA frame with opaque alpha.
///
/// `dst` is left untouched when the lengths disagree.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % 3 != 0 {
        return Err(PixelFormatError::RgbNotPixelAligned { len: src.len() });
    }

    let expected = (src.len() / 3) * 4;
    if dst.len() != expected {
        return Err(PixelFormatError::LengthMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}

/// Fills an RGBA frame with one opaque colour.
pub fn fill_rgba(dst: &mut [u8], colour: Colour) {
    for pixel in dst.chunks_exact_mut(4) {
        pixel.copy_from_slice(&[colour.r, colour.g, colour.b, 255]);
    }
}
