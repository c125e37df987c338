//! # File Pipelines
//!
//! Glue between the filesystem, the image I/O layer and the codec. Each function
//! validates everything it can before writing anything, so a failed call leaves no
//! output image or revealed file behind.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use log::{info, warn};

use crate::error::{Result, StegoError};
use crate::imaging::{decode_image, encode_image, ensure_lossless};
use crate::processing::steganography::{self, capacity_bits, max_content_len};
use crate::processing::FrameFormat;

/// Outcome of [`hide_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HideReport {
    pub output: PathBuf,
    pub filename: String,
    pub hidden_bytes: usize,
    pub used_bits: usize,
    pub capacity_bits: usize,
}

/// Outcome of [`reveal_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealReport {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Outcome of [`carrier_capacity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityReport {
    pub width: u32,
    pub height: u32,
    pub capacity_bits: usize,
    /// Largest secret file that fits under the given name, if any
    pub max_content_bytes: Option<usize>,
}

/// Hide `secret` inside `carrier` and write the result to `output`.
///
/// The secret is stored under its base name.
///
/// # Errors
/// - [`StegoError::UnsupportedFormat`] if `carrier` or `output` is not PNG/BMP
/// - [`StegoError::SourceNotFound`] if `secret` does not exist
/// - [`StegoError::InvalidFilename`] if the base name is not usable
/// - [`StegoError::CapacityExceeded`] if the carrier is too small
/// - [`StegoError::Image`] / [`StegoError::Io`] on read or write failure
pub fn hide_file(carrier: &Path, secret: &Path, output: &Path) -> Result<HideReport> {
    ensure_lossless(carrier)?;
    ensure_lossless(output)?;

    let content = fs::read(secret).map_err(|e| match e.kind() {
        ErrorKind::NotFound => StegoError::SourceNotFound(secret.to_path_buf()),
        _ => StegoError::Io(e),
    })?;

    let filename = secret
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| StegoError::InvalidFilename(secret.display().to_string()))?
        .to_string();

    let pixels = decode_image(carrier)?;
    let capacity = capacity_bits(&pixels);
    let stego = steganography::encode(pixels, &filename, &content)?;
    encode_image(&stego, output)?;

    let used_bits = (content.len() + FrameFormat::STANDARD.overhead(&filename)) * 8;
    info!(
        "Encoding successful. {} hidden bytes. Image saved as: {}",
        content.len(),
        output.display()
    );

    Ok(HideReport {
        output: output.to_path_buf(),
        filename,
        hidden_bytes: content.len(),
        used_bits,
        capacity_bits: capacity,
    })
}

/// Extract the file hidden in `stego` and write it to `output_dir/<name>`.
///
/// `output_dir` is created if needed. An existing file with the same name is
/// overwritten.
///
/// # Errors
/// - [`StegoError::UnsupportedFormat`] if `stego` is not PNG/BMP
/// - [`StegoError::MarkerNotFound`] / [`StegoError::CorruptPayload`] if nothing
///   valid is hidden
/// - [`StegoError::UnsafeFilename`] if the hidden name is not a plain file name
/// - [`StegoError::Image`] / [`StegoError::Io`] on read or write failure
pub fn reveal_file(stego: &Path, output_dir: &Path) -> Result<RevealReport> {
    ensure_lossless(stego)?;

    let pixels = decode_image(stego)?;
    let hidden = steganography::decode(&pixels)?;
    check_plain_filename(&hidden.filename)?;

    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(&hidden.filename);
    if path.exists() {
        warn!("Overwriting existing file {}", path.display());
    }
    fs::write(&path, &hidden.content)?;

    info!(
        "Decoding successful. Secret file saved as: {} ({} bytes)",
        path.display(),
        hidden.content.len()
    );

    Ok(RevealReport {
        path,
        bytes: hidden.content.len(),
    })
}

/// Report how much `carrier` can hold for a file called `filename`.
pub fn carrier_capacity(carrier: &Path, filename: &str) -> Result<CapacityReport> {
    ensure_lossless(carrier)?;

    let pixels = decode_image(carrier)?;
    Ok(CapacityReport {
        width: pixels.width(),
        height: pixels.height(),
        capacity_bits: capacity_bits(&pixels),
        max_content_bytes: max_content_len(&pixels, filename),
    })
}

/// A revealed name must be exactly one normal path component.
fn check_plain_filename(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None)
            if part == name && !name.contains(['/', '\\']) =>
        {
            Ok(())
        }
        _ => Err(StegoError::UnsafeFilename(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_plain_filename() {
        for ok in ["secret.txt", "a b.bin", ".hidden", "..."] {
            assert!(check_plain_filename(ok).is_ok(), "{ok}");
        }
        for bad in ["", ".", "..", "../x", "dir/x", "/etc/passwd", "a\\b", "x/"] {
            assert!(
                matches!(check_plain_filename(bad), Err(StegoError::UnsafeFilename(_))),
                "{bad}"
            );
        }
    }
}
