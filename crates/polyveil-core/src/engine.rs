//! Per-unit encryption engine.
//!
//! One [`Engine`] serves one obfuscated unit (one class, module, or
//! whatever granularity the host pipeline embeds key material at): it owns
//! the unit's shared key bytes and the rng behind per-string variant
//! selection. The host feeds it each targeted string literal together with
//! that call site's key, embeds the resulting ciphertext and variant tag,
//! and embeds the shared key material exactly once. Units are independent;
//! pipelines processing units in parallel give each its own `Engine`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cipher::Variant;
use crate::encode;
use crate::error::EngineError;

/// Shared key bytes for one obfuscated unit.
///
/// Generated (or supplied) once per unit, embedded read-only into the
/// artifact, and cycled as one of the two key streams of every transform.
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    bytes: Vec<u8>,
}

impl KeyMaterial {
    /// Wrap caller-supplied key bytes.
    ///
    /// Empty input is a configuration error, rejected here so that no
    /// encryption path ever sees a zero-length cyclic key stream.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<KeyMaterial, EngineError> {
        if bytes.is_empty() {
            return Err(EngineError::EmptyKeyMaterial);
        }
        Ok(KeyMaterial { bytes })
    }

    /// Generate `len` random key bytes.
    pub fn generate(len: usize, rng: &mut impl Rng) -> Result<KeyMaterial, EngineError> {
        let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        KeyMaterial::from_bytes(bytes)
    }

    /// The bytes the host embeds exactly once per unit.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// One encrypted string literal, ready for embedding.
///
/// Transient: the host consumes it immediately into the injected payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedRecord {
    /// Transformed UTF-16 code-unit bytes; always the same length as the
    /// plaintext's encoding.
    pub ciphertext: Vec<u8>,
    /// Which transform produced `ciphertext`.
    pub variant: Variant,
    /// The call-site key this record was encrypted under; the host wires
    /// its run-time accessor to the same value at the call site.
    pub call_site_key: i32,
}

/// Contract of the decryption routine a host embeds once per unit.
///
/// Every call site in the unit invokes the routine with its own
/// ciphertext, the unit's shared key material, the call site's recomputed
/// key, and the variant tag stored next to the ciphertext.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecryptorSpec {
    /// Path of the routine every call site references.
    pub symbol: &'static str,
    /// The routine's signature, in call-site argument order.
    pub signature: &'static str,
}

/// Encryption engine bound to one unit's key material.
///
/// Construction is the only state transition: an `Engine` cannot exist
/// without key material, and the material never changes afterwards.
pub struct Engine {
    key_material: KeyMaterial,
    rng: ChaCha20Rng,
}

impl Engine {
    /// Bind `key_material` for one unit. `seed` makes variant selection
    /// reproducible: identical seeds and inputs yield identical records.
    pub fn new(key_material: KeyMaterial, seed: u64) -> Engine {
        Engine {
            key_material,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// The unit's shared key material.
    pub fn key_material(&self) -> &KeyMaterial {
        &self.key_material
    }

    /// Encrypt one string literal under a freshly drawn variant.
    ///
    /// Total: any string (empty included) and any `i32` key are valid.
    /// Empty plaintext yields empty ciphertext.
    pub fn encrypt(&mut self, plaintext: &str, call_site_key: i32) -> EncryptedRecord {
        let variant = Variant::ALL[self.rng.gen_range(0..Variant::ALL.len())];
        self.encrypt_as(variant, plaintext, call_site_key)
    }

    /// Like [`encrypt`](Self::encrypt), drawing the variant from a
    /// caller-supplied rng. Concurrent encrypt calls within one unit each
    /// bring their own rng; the engine itself is only read.
    pub fn encrypt_with(
        &self,
        rng: &mut impl Rng,
        plaintext: &str,
        call_site_key: i32,
    ) -> EncryptedRecord {
        let variant = Variant::ALL[rng.gen_range(0..Variant::ALL.len())];
        self.encrypt_as(variant, plaintext, call_site_key)
    }

    fn encrypt_as(&self, variant: Variant, plaintext: &str, call_site_key: i32) -> EncryptedRecord {
        let mut buf = encode::utf16_bytes(plaintext);
        variant.encrypt_in_place(&mut buf, self.key_material.as_bytes(), call_site_key);

        // A round-trip mismatch is a cipher-pair bug and fatal to the
        // calling pipeline; catch it before the ciphertext is embedded.
        debug_assert_eq!(
            {
                let mut check = buf.clone();
                variant.decrypt_in_place(&mut check, self.key_material.as_bytes(), call_site_key);
                encode::string_from_utf16_bytes(&check)
            },
            plaintext,
            "BUG: encrypt/decrypt roundtrip failed"
        );

        EncryptedRecord {
            ciphertext: buf,
            variant,
            call_site_key,
        }
    }

    /// The routine the host must embed once per unit and reference from
    /// every call site in it. The implementation lives in
    /// `polyveil-runtime`, which carries no dependencies so it can ship
    /// inside the protected artifact as-is.
    pub fn decryptor_spec() -> DecryptorSpec {
        DecryptorSpec {
            symbol: "polyveil_runtime::decrypt::decrypt_poly",
            signature:
                "(ciphertext: &[u8], key_material: &[u8], call_site_key: i32, variant: i32) -> String",
        }
    }
}
