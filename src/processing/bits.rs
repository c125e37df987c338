//! Conversion between bytes and ordered bit sequences.
//!
//! A bit sequence is a `Vec<u8>` holding only `0` and `1`, most significant bit of
//! each byte first.

/// Expand every byte into its 8 bits, MSB first.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        bits.extend((0..8).rev().map(|shift| (byte >> shift) & 1));
    }
    bits
}

/// Pack groups of 8 bits back into bytes.
///
/// A trailing group shorter than 8 bits is dropped.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|group| group.iter().fold(0u8, |byte, &bit| (byte << 1) | (bit & 1)))
        .collect()
}
