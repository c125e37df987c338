//! # Image I/O
//!
//! Moves images between disk and [`PixelBuffer`]s using the `image` crate. Only
//! lossless formats are allowed through, since any recompression would destroy the
//! hidden bits.

use std::path::Path;

use image::RgbImage;
use log::debug;

use crate::error::{Result, StegoError};
use crate::processing::PixelBuffer;

/// Extensions whose encoders keep every sample bit.
pub const LOSSLESS_EXTENSIONS: [&str; 2] = ["png", "bmp"];

/// Samples per pixel after normalization.
pub const RGB_CHANNELS: u8 = 3;

/// Reject any path whose extension is not `.png` or `.bmp` (case-insensitive).
pub fn ensure_lossless(path: &Path) -> Result<()> {
    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            LOSSLESS_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false);

    if supported {
        Ok(())
    } else {
        Err(StegoError::UnsupportedFormat(path.to_path_buf()))
    }
}

/// Load an image and flatten it to RGB samples.
///
/// Alpha is discarded and grayscale is expanded, so the result always has three
/// channels.
pub fn decode_image(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)?.to_rgb8();
    let (width, height) = img.dimensions();
    debug!("Decoded {} ({}x{})", path.display(), width, height);

    PixelBuffer::new(img.into_raw(), width, height, RGB_CHANNELS)
}

/// Write `pixels` as an RGB image; the format follows the extension of `path`.
pub fn encode_image(pixels: &PixelBuffer, path: &Path) -> Result<()> {
    if pixels.channels() != RGB_CHANNELS {
        return Err(StegoError::InvalidShape {
            samples: pixels.len(),
            width: pixels.width(),
            height: pixels.height(),
            channels: pixels.channels(),
        });
    }

    let img = RgbImage::from_raw(pixels.width(), pixels.height(), pixels.samples().to_vec())
        .ok_or(StegoError::InvalidShape {
            samples: pixels.len(),
            width: pixels.width(),
            height: pixels.height(),
            channels: pixels.channels(),
        })?;

    img.save(path)?;
    debug!("Encoded {} ({}x{})", path.display(), pixels.width(), pixels.height());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_lossless() {
        assert!(ensure_lossless(Path::new("cover.png")).is_ok());
        assert!(ensure_lossless(Path::new("dir/COVER.BMP")).is_ok());

        for bad in ["photo.jpg", "photo.jpeg", "image.gif", "noext", "png"] {
            assert!(matches!(
                ensure_lossless(Path::new(bad)),
                Err(StegoError::UnsupportedFormat(_))
            ));
        }
    }

    #[test]
    fn test_png_round_trip_keeps_samples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixels.png");

        let samples: Vec<u8> = (0..4 * 3 * 3).map(|i| i as u8 * 7).collect();
        let pixels = PixelBuffer::new(samples, 4, 3, 3).unwrap();
        encode_image(&pixels, &path).unwrap();

        assert_eq!(decode_image(&path).unwrap(), pixels);
    }

    #[test]
    fn test_encode_rejects_non_rgb_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let pixels = PixelBuffer::new(vec![0; 8], 2, 1, 4).unwrap();
        let err = encode_image(&pixels, &dir.path().join("x.png")).unwrap_err();
        assert!(matches!(err, StegoError::InvalidShape { channels: 4, .. }));
    }
}
