//! Run-time half of the polyveil string-encryption engine.
//!
//! Carries only what a protected artifact needs: the shared decryption
//! routine that every protected call site invokes. Deliberately
//! dependency-free so hosts can ship it as-is.

pub mod decrypt;

pub use decrypt::{decrypt_poly, decrypt_poly_bytes};
