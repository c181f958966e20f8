//! UTF-16 code-unit byte codec.
//!
//! Ciphertexts are defined over the plaintext's 16-bit code units, two
//! bytes per unit in big-endian order. The byte order is fixed rather than
//! platform-native so the obfuscation-time and run-time halves always
//! agree, whatever hosts they run on. No BOM: ciphertext length is exactly
//! twice the code-unit count.

/// Encode a string as big-endian UTF-16 code-unit bytes.
pub fn utf16_bytes(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len() * 2);
    for unit in s.encode_utf16() {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    out
}

/// Decode big-endian UTF-16 code-unit bytes back into a string.
///
/// Malformed input (odd length, unpaired surrogates) decodes lossily:
/// the run-time consumer of this codec has no error channel, so corrupted
/// ciphertext must yield garbage rather than a panic.
pub fn string_from_utf16_bytes(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}
