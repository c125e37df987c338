//! # stegfile
//!
//! Hide a file inside the least significant bits of a PNG or BMP image and get it
//! back out again.
//!
//! - [`processing`]: the codec (bits, framing, pixel buffer, embed/extract)
//! - [`imaging`]: PNG/BMP decode and encode
//! - [`pipeline`]: file-level `hide` / `reveal` / `capacity`
//! - [`common`]: configuration for the binary

pub mod common;
pub mod error;
pub mod imaging;
pub mod pipeline;
pub mod processing;

pub use error::{FramingError, Result, StegoError};
pub use pipeline::{carrier_capacity, hide_file, reveal_file};
pub use processing::{decode, encode, HiddenFile, PixelBuffer};
