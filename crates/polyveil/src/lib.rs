//! Polymorphic string-encryption engine for binary-obfuscation pipelines.
//!
//! Each protected string literal is encrypted under one of several
//! reversible byte-transform variants, keyed by per-unit shared key
//! material plus a per-call-site integer the host's control-flow machinery
//! recomputes at run time. A single shared runtime routine reverses
//! whichever variant was chosen, so no fixed byte pattern and no single
//! decryption constant is reusable across literals.
//!
//! This crate re-exports the obfuscation-time engine (`polyveil-core`) and
//! the embeddable run-time decryptor (`polyveil-runtime`).
//!
//! ```
//! use polyveil::{decrypt_poly, Engine, KeyMaterial};
//!
//! let keys = KeyMaterial::from_bytes(vec![0x13, 0x88, 0x4A, 0xFE]).unwrap();
//! let mut engine = Engine::new(keys, 0xC0FFEE);
//!
//! // The host's control-flow oracle supplies this per call site and
//! // recomputes the same value inside the artifact at run time.
//! let call_site_key = -773_202;
//! let record = engine.encrypt("connect.internal", call_site_key);
//!
//! let plain = decrypt_poly(
//!     &record.ciphertext,
//!     engine.key_material().as_bytes(),
//!     call_site_key,
//!     record.variant.tag(),
//! );
//! assert_eq!(plain, "connect.internal");
//! ```

pub use polyveil_core::{
    cipher, encode, DecryptorSpec, EncryptedRecord, Engine, EngineError, KeyMaterial, Variant,
};
pub use polyveil_runtime::decrypt::{decrypt_poly, decrypt_poly_bytes};
