//! Obfuscation-time half of the polyveil string-encryption engine.
//!
//! A host transformation pipeline hands each targeted string literal to an
//! [`Engine`] together with a per-call-site `i32` key produced by its
//! control-flow machinery. The engine encrypts the literal's UTF-16
//! code-unit bytes under a randomly drawn [`Variant`] and returns the
//! ciphertext and tag for the host to embed; the unit's shared
//! [`KeyMaterial`] is embedded exactly once. At run time a single shared
//! routine (the `polyveil-runtime` crate) reverses whichever transform was
//! chosen.
//!
//! This is NOT cryptographically secure encryption — the key material
//! ships inside the protected artifact. The goal is that no fixed byte
//! pattern and no single-pass script recovers every literal: each one
//! needs its variant tag plus a call-site key that only unrelated
//! control-flow logic produces.

pub mod cipher;
pub mod encode;
mod engine;
mod error;

pub use cipher::Variant;
pub use engine::{DecryptorSpec, EncryptedRecord, Engine, KeyMaterial};
pub use error::EngineError;
