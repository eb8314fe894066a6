//! ChaCha20 stream cipher (RFC 7539).
//!
//! This crate provides only the keystream engine: callers supply the key and
//! nonce, and combine data with the keystream via `encrypt`/`decrypt` (the
//! same XOR operation). A (key, nonce) pair must be unique per keystream;
//! reuse breaks confidentiality and is NOT detected by the engine.

pub use crate::cipher_result::{CipherError, CipherErrorKind, CipherResult};
pub use crate::crypto::chacha20::ChaCha20;

#[macro_use]
pub mod macros;

pub mod cipher_result;

// basic crypto primitives
pub mod crypto;
