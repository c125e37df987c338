//! # Payload Framing
//!
//! A hidden file travels as a single frame:
//!
//! ```text
//! [ file name (UTF-8) ] [ 0x7C '|' ] [ content ] [ "END!" ]
//! ```
//!
//! The end marker is what the extractor scans for, so the frame carries no length.

use crate::error::FramingError;
use crate::processing::bits::bytes_to_bits;

/// Byte separating the file name from the content.
pub const SEPARATOR: u8 = b'|';

/// Sentinel appended after the content.
pub const END_MARKER: &[u8] = b"END!";

/// The separator and end marker used to build and parse frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameFormat {
    pub separator: u8,
    pub end_marker: &'static [u8],
}

impl FrameFormat {
    /// The layout every stegfile image uses.
    pub const STANDARD: FrameFormat = FrameFormat {
        separator: SEPARATOR,
        end_marker: END_MARKER,
    };

    /// Concatenate file name, separator, content and end marker.
    pub fn build(&self, filename: &str, content: &[u8]) -> Vec<u8> {
        let mut frame =
            Vec::with_capacity(filename.len() + 1 + content.len() + self.end_marker.len());
        frame.extend_from_slice(filename.as_bytes());
        frame.push(self.separator);
        frame.extend_from_slice(content);
        frame.extend_from_slice(self.end_marker);
        frame
    }

    /// Split a frame (end marker already removed) at the first separator.
    pub fn parse(&self, frame: &[u8]) -> Result<(String, Vec<u8>), FramingError> {
        let index = frame
            .iter()
            .position(|&b| b == self.separator)
            .ok_or(FramingError::MissingSeparator)?;

        let filename = std::str::from_utf8(&frame[..index])?.to_string();
        Ok((filename, frame[index + 1..].to_vec()))
    }

    /// Number of bytes a frame adds around the content.
    pub fn overhead(&self, filename: &str) -> usize {
        filename.len() + 1 + self.end_marker.len()
    }

    pub fn marker_bits(&self) -> Vec<u8> {
        bytes_to_bits(self.end_marker)
    }
}

/// Build a frame with [`FrameFormat::STANDARD`].
pub fn build_frame(filename: &str, content: &[u8]) -> Vec<u8> {
    FrameFormat::STANDARD.build(filename, content)
}

/// Parse a frame with [`FrameFormat::STANDARD`].
pub fn parse_frame(frame: &[u8]) -> Result<(String, Vec<u8>), FramingError> {
    FrameFormat::STANDARD.parse(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_frame_layout() {
        let frame = build_frame("a.txt", b"hi");
        assert_eq!(frame, b"a.txt|hiEND!");
        assert_eq!(frame.len(), FrameFormat::STANDARD.overhead("a.txt") + 2);
    }

    #[test]
    fn test_parse_frame_splits_on_first_separator() {
        let (name, content) = parse_frame(b"notes.txt|a|b").unwrap();
        assert_eq!(name, "notes.txt");
        assert_eq!(content, b"a|b");
    }

    #[test]
    fn test_parse_frame_empty_content() {
        let (name, content) = parse_frame(b"empty.bin|").unwrap();
        assert_eq!(name, "empty.bin");
        assert!(content.is_empty());
    }

    #[test]
    fn test_filename_containing_separator_is_split_early() {
        // Ambiguous by construction: the first '|' always wins.
        let frame = build_frame("left|right.txt", b"data");
        let body = &frame[..frame.len() - END_MARKER.len()];
        let (name, content) = parse_frame(body).unwrap();
        assert_eq!(name, "left");
        assert_eq!(content, b"right.txt|data");
    }

    #[test]
    fn test_parse_frame_errors() {
        assert_eq!(
            parse_frame(b"no separator here"),
            Err(FramingError::MissingSeparator)
        );
        assert!(matches!(
            parse_frame(&[0xFF, 0xFE, b'|', 1]),
            Err(FramingError::InvalidFilename(_))
        ));
    }

    #[test]
    fn test_marker_bits() {
        let bits = FrameFormat::STANDARD.marker_bits();
        assert_eq!(bits.len(), 32);
        assert_eq!(&bits[..8], &[0, 1, 0, 0, 0, 1, 0, 1]);
    }
}
