//! Owned pixel sample buffer with explicit shape.

use crate::error::{Result, StegoError};

/// Flat, row-major, channel-interleaved 8-bit samples plus the shape needed to
/// rebuild the image.
///
/// Every sample carries exactly one hidden bit, so [`PixelBuffer::len`] is also the
/// capacity in bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    samples: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

impl PixelBuffer {
    /// Wrap `samples`, checking that they fill a `width x height x channels` image.
    pub fn new(samples: Vec<u8>, width: u32, height: u32, channels: u8) -> Result<Self> {
        let expected = width as usize * height as usize * channels as usize;
        if samples.len() != expected {
            return Err(StegoError::InvalidShape {
                samples: samples.len(),
                width,
                height,
                channels,
            });
        }

        Ok(Self {
            samples,
            width,
            height,
            channels,
        })
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

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_shape() {
        let buffer = PixelBuffer::new(vec![0; 2 * 3 * 3], 2, 3, 3).unwrap();
        assert_eq!(buffer.len(), 18);
        assert_eq!((buffer.width(), buffer.height(), buffer.channels()), (2, 3, 3));

        let err = PixelBuffer::new(vec![0; 17], 2, 3, 3).unwrap_err();
        assert!(matches!(err, StegoError::InvalidShape { samples: 17, .. }));
    }

    #[test]
    fn test_empty_image() {
        let buffer = PixelBuffer::new(Vec::new(), 0, 0, 3).unwrap();
        assert!(buffer.is_empty());
    }
}
