//! # LSB Steganography Implementation
//!
//! Hides a whole file (name and content) in the least significant bit of every
//! sample of a [`PixelBuffer`], and recovers it again.
//!
//! ## Algorithm
//!
//! ### Encoding Process
//! 1. Build the frame `name | content END!` (see [`frame`](super::frame))
//! 2. Expand the frame to bits, MSB first
//! 3. Check that the buffer has one sample per bit
//! 4. For each bit, clear the LSB of the next sample and set it to the bit
//!    (R → G → B → next pixel, row by row)
//!
//! ### Decoding Process
//! 1. Read the LSB of each sample in the same order
//! 2. After every bit, compare the last 32 bits read with the bits of `END!`
//! 3. On the first match, drop the marker, pack the bits into bytes and split the
//!    frame at the first `|`
//!
//! ### Capacity
//! A buffer holds one bit per sample, so an RGB image carries
//! `(width * height * 3) / 8` frame bytes.
//!
//! Example: An 800x600 image can store ~180 KB including name and marker.
//!
//! ### Known limitation
//! The end marker is found by scanning, not by length. If the bits of `END!` show
//! up inside the name or content, decoding stops there and the file comes back
//! truncated.

use log::debug;

use crate::error::{Result, StegoError};
use crate::processing::bits::{bits_to_bytes, bytes_to_bits};
use crate::processing::frame::FrameFormat;
use crate::processing::pixels::PixelBuffer;

/// A file recovered from an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenFile {
    pub filename: String,
    pub content: Vec<u8>,
}

/// Number of bits `pixels` can hold.
pub fn capacity_bits(pixels: &PixelBuffer) -> usize {
    pixels.len()
}

/// Largest content, in bytes, that fits in `pixels` alongside `filename`.
///
/// Returns `None` when not even an empty file with this name fits, or when
/// [`encode`] would reject the name.
pub fn max_content_len(pixels: &PixelBuffer, filename: &str) -> Option<usize> {
    let format = FrameFormat::STANDARD;
    if filename.as_bytes().contains(&format.separator) {
        return None;
    }
    (capacity_bits(pixels) / 8).checked_sub(format.overhead(filename))
}

/// Hide `filename` and `content` in the LSBs of `pixels`.
///
/// # Arguments
/// - `pixels`: Samples of a carrier decoded from a lossless image
/// - `filename`: Name the file will be revealed under
/// - `content`: Raw file bytes
///
/// # Returns
/// - `Ok(PixelBuffer)`: The same buffer with the frame written into its first
///   `8 * frame_len` samples; shape is unchanged
///
/// # Errors
/// - [`StegoError::InvalidFilename`] if the name contains the separator byte
/// - [`StegoError::CapacityExceeded`] if the frame needs more bits than there are
///   samples; the buffer is not modified in that case
pub fn encode(pixels: PixelBuffer, filename: &str, content: &[u8]) -> Result<PixelBuffer> {
    encode_with_format(&FrameFormat::STANDARD, pixels, filename, content)
}

/// [`encode`] with an explicit frame layout.
pub fn encode_with_format(
    format: &FrameFormat,
    mut pixels: PixelBuffer,
    filename: &str,
    content: &[u8],
) -> Result<PixelBuffer> {
    if filename.as_bytes().contains(&format.separator) {
        return Err(StegoError::InvalidFilename(filename.to_string()));
    }

    let message_bits = bytes_to_bits(&format.build(filename, content));

    let available = capacity_bits(&pixels);
    if message_bits.len() > available {
        return Err(StegoError::CapacityExceeded {
            required: message_bits.len(),
            available,
        });
    }

    for (sample, &bit) in pixels.samples_mut().iter_mut().zip(&message_bits) {
        *sample = (*sample & 0xFE) | bit;
    }

    debug!(
        "Embedded {} bits ({} content bytes) into {} samples",
        message_bits.len(),
        content.len(),
        available
    );

    Ok(pixels)
}

/// Recover the file hidden in `pixels`.
///
/// # Errors
/// - [`StegoError::MarkerNotFound`] if no `END!` shows up in the LSB stream
/// - [`StegoError::CorruptPayload`] if the bits before the marker do not form a
///   valid frame
pub fn decode(pixels: &PixelBuffer) -> Result<HiddenFile> {
    decode_with_format(&FrameFormat::STANDARD, pixels)
}

/// [`decode`] with an explicit frame layout.
pub fn decode_with_format(format: &FrameFormat, pixels: &PixelBuffer) -> Result<HiddenFile> {
    let marker_bits = format.marker_bits();
    let marker_len = marker_bits.len();
    let mut secret_bits = Vec::new();

    for &sample in pixels.samples() {
        secret_bits.push(sample & 1);

        // Earliest match wins; anything after it is never read.
        if secret_bits.len() >= marker_len
            && secret_bits[secret_bits.len() - marker_len..] == marker_bits[..]
        {
            secret_bits.truncate(secret_bits.len() - marker_len);
            debug!("End marker found after {} payload bits", secret_bits.len());

            let (filename, content) = format.parse(&bits_to_bytes(&secret_bits))?;
            return Ok(HiddenFile { filename, content });
        }
    }

    Err(StegoError::MarkerNotFound)
}
