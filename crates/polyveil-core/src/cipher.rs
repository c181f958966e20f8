//! Reversible polymorphic byte-transform variants.
//!
//! Every variant composes cheap, branch-free per-byte operations: XOR
//! against two independent cyclic key streams, plus at most one non-XOR
//! step (bit rotation or modular addition) in a fixed position. Decryption
//! undoes the steps in strictly reverse order — rotation and addition do
//! not commute with XOR, so step order is part of the contract.
//!
//! The two key streams are:
//! - the unit's shared key material, embedded once into the artifact and
//!   indexed cyclically (`keys[i % keys.len()]`);
//! - a per-call-site stream: the decimal ASCII rendering of an `i32` that
//!   the host's control-flow machinery recomputes identically at run time.
//!
//! Forward/inverse pairs live next to each other below. Adding a variant
//! is one new pair plus one arm in each dispatch method and a new `ALL`
//! entry; existing variants are never touched.

/// Tag selecting which reversible transform encrypted a given string.
///
/// Tags are persisted as `i32` constants next to each ciphertext, so the
/// discriminants are part of the embedded-artifact contract and must not
/// be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// XOR against both key streams.
    Xor = 0,
    /// XOR against both key streams, then rotate left by 3.
    XorRotate = 1,
    /// XOR against both key streams, then add the call-site key's low byte.
    XorAdd = 2,
}

impl Variant {
    /// Every supported variant, in tag order.
    pub const ALL: [Variant; 3] = [Variant::Xor, Variant::XorRotate, Variant::XorAdd];

    /// Decode a persisted variant tag. Returns `None` for tags no engine
    /// ever produces.
    pub fn from_tag(tag: i32) -> Option<Variant> {
        match tag {
            0 => Some(Variant::Xor),
            1 => Some(Variant::XorRotate),
            2 => Some(Variant::XorAdd),
            _ => None,
        }
    }

    /// The tag embedded alongside a ciphertext.
    pub fn tag(self) -> i32 {
        self as i32
    }

    /// Apply this variant's forward transform to `buf` in place.
    ///
    /// `keys` must be non-empty ([`KeyMaterial`](crate::KeyMaterial)
    /// enforces that before any encryption happens). Any byte value and
    /// any `call_site_key`, including negative ones, are valid.
    pub fn encrypt_in_place(self, buf: &mut [u8], keys: &[u8], call_site_key: i32) {
        let derived = derive_key_stream(call_site_key);
        match self {
            Variant::Xor => xor_forward(buf, &derived, keys),
            Variant::XorRotate => rotate_forward(buf, &derived, keys),
            Variant::XorAdd => add_forward(buf, &derived, keys, call_site_key),
        }
    }

    /// Apply this variant's inverse transform to `buf` in place.
    ///
    /// Exact inverse of [`encrypt_in_place`](Self::encrypt_in_place) under
    /// the same `keys` and `call_site_key`.
    pub fn decrypt_in_place(self, buf: &mut [u8], keys: &[u8], call_site_key: i32) {
        let derived = derive_key_stream(call_site_key);
        match self {
            Variant::Xor => xor_inverse(buf, &derived, keys),
            Variant::XorRotate => rotate_inverse(buf, &derived, keys),
            Variant::XorAdd => add_inverse(buf, &derived, keys, call_site_key),
        }
    }
}

/// Derive the per-call-site key stream: the decimal ASCII bytes of the key.
///
/// Negative keys contribute their `-` sign as a key byte like any other,
/// which also changes the stream length and therefore the cycle period.
pub fn derive_key_stream(call_site_key: i32) -> Vec<u8> {
    call_site_key.to_string().into_bytes()
}

// Variant 0: XOR with the derived stream, then the shared stream.

fn xor_forward(buf: &mut [u8], derived: &[u8], keys: &[u8]) {
    for i in 0..buf.len() {
        buf[i] ^= derived[i % derived.len()];
        buf[i] ^= keys[i % keys.len()];
    }
}

fn xor_inverse(buf: &mut [u8], derived: &[u8], keys: &[u8]) {
    for i in 0..buf.len() {
        buf[i] ^= keys[i % keys.len()];
        buf[i] ^= derived[i % derived.len()];
    }
}

// Variant 1: both XORs, then a circular left rotation by 3.

fn rotate_forward(buf: &mut [u8], derived: &[u8], keys: &[u8]) {
    for i in 0..buf.len() {
        buf[i] ^= derived[i % derived.len()];
        buf[i] ^= keys[i % keys.len()];
        buf[i] = buf[i].rotate_left(3);
    }
}

fn rotate_inverse(buf: &mut [u8], derived: &[u8], keys: &[u8]) {
    for i in 0..buf.len() {
        buf[i] = buf[i].rotate_right(3);
        buf[i] ^= keys[i % keys.len()];
        buf[i] ^= derived[i % derived.len()];
    }
}

// Variant 2: both XORs, then add the key's low byte mod 256.
//
// `call_site_key as u8` is two's-complement truncation, so the offset is
// identical for encrypt and decrypt regardless of the key's sign.

fn add_forward(buf: &mut [u8], derived: &[u8], keys: &[u8], call_site_key: i32) {
    let offset = call_site_key as u8;
    for i in 0..buf.len() {
        buf[i] ^= derived[i % derived.len()];
        buf[i] ^= keys[i % keys.len()];
        buf[i] = buf[i].wrapping_add(offset);
    }
}

fn add_inverse(buf: &mut [u8], derived: &[u8], keys: &[u8], call_site_key: i32) {
    let offset = call_site_key as u8;
    for i in 0..buf.len() {
        buf[i] = buf[i].wrapping_sub(offset);
        buf[i] ^= keys[i % keys.len()];
        buf[i] ^= derived[i % derived.len()];
    }
}
