//! # Sigil Envelope
//!
//! Sign/verify protocol over canonical JSON payloads.
//!
//! A [`SignatureEnvelope`] binds an Ed25519 signature to the *canonical* form
//! of a JSON payload (see `sigil-canonical`), not to any particular textual
//! serialization. Re-serializing the same logical payload with different key
//! order or whitespace neither breaks nor forges a signature; changing its
//! content always breaks it.
//!
//! Key generation policy and secure key storage live outside this crate - a
//! platform keystore owns long-lived keys, and [`KeyPair`] only wraps key
//! material that is already in memory.
//!
//! # Example
//!
//! ```rust
//! use sigil_envelope::{KeyPair, SignatureEnvelope};
//! use serde_json::json;
//!
//! let keypair = KeyPair::generate();
//!
//! let payload = json!({
//!     "id": 12450,
//!     "data": [{"id": "test1", "created": "2026-01-05T10:12:00Z"}]
//! });
//!
//! let envelope = SignatureEnvelope::sign_value(payload, &keypair);
//! assert!(envelope.verify().unwrap());
//!
//! // Tampering with the payload invalidates the signature
//! let mut tampered = envelope.clone();
//! tampered.payload["id"] = json!(99999);
//! assert!(!tampered.verify().unwrap());
//! ```

mod envelope;
mod error;
mod keys;

pub use envelope::*;
pub use error::*;
pub use keys::*;
