//! # Pixel Steganography Codec
//!
//! Everything that operates on raw samples: bit conversion, payload framing, the
//! sample buffer itself, and LSB embedding/extraction. Nothing here touches the
//! filesystem.

pub mod bits;
pub mod frame;
pub mod pixels;
pub mod steganography;

// Re-export main items for convenience
pub use frame::{build_frame, parse_frame, FrameFormat, END_MARKER, SEPARATOR};
pub use pixels::PixelBuffer;
pub use steganography::{decode, encode, HiddenFile};
