//! Runtime string decryption.
//!
//! The single routine a host embeds once per obfuscated unit and
//! references from every protected call site in it. It dispatches on the
//! variant tag stored next to each ciphertext, undoes that variant's
//! transform in strictly reverse step order, and decodes the big-endian
//! UTF-16 bytes back into a string.
//!
//! The inverse transforms here MUST be kept in sync with
//! `polyveil_core::cipher`. They are duplicated rather than shared so this
//! crate stays dependency-free and ships inside the artifact as-is.

/// Decrypt one encrypted string literal.
///
/// Arguments, in call-site order: the literal's ciphertext, the unit's
/// shared key material, the call site's recomputed key, and the variant
/// tag. Degenerate inputs (empty key material, a tag no engine produces)
/// yield garbage or the raw decode rather than a panic — this runs inside
/// a protected artifact with no error channel.
#[inline(always)]
pub fn decrypt_poly(
    ciphertext: &[u8],
    key_material: &[u8],
    call_site_key: i32,
    variant: i32,
) -> String {
    let bytes = decrypt_poly_bytes(ciphertext, key_material, call_site_key, variant);
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

/// Decrypt to raw code-unit bytes (for hosts embedding non-string data).
#[inline(always)]
pub fn decrypt_poly_bytes(
    ciphertext: &[u8],
    key_material: &[u8],
    call_site_key: i32,
    variant: i32,
) -> Vec<u8> {
    let mut buf = ciphertext.to_vec();
    if key_material.is_empty() {
        return buf;
    }

    let derived = call_site_key.to_string().into_bytes();
    let len = buf.len();
    let sl = key_material.len();
    let dl = derived.len();

    match variant {
        0 => {
            for i in 0..len {
                buf[i] ^= key_material[i % sl];
                buf[i] ^= derived[i % dl];
            }
        }
        1 => {
            for i in 0..len {
                buf[i] = buf[i].rotate_right(3);
                buf[i] ^= key_material[i % sl];
                buf[i] ^= derived[i % dl];
            }
        }
        2 => {
            let offset = call_site_key as u8;
            for i in 0..len {
                buf[i] = buf[i].wrapping_sub(offset);
                buf[i] ^= key_material[i % sl];
                buf[i] ^= derived[i % dl];
            }
        }
        _ => {}
    }

    buf
}
