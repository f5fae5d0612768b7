//! Error types for Sigil envelopes.
//!
//! A failed cryptographic check is NOT an error: [`verify`] returns
//! `Ok(false)` for a well-formed envelope whose signature does not match.
//! The variants here cover envelopes that cannot even be evaluated.
//!
//! [`verify`]: crate::SignatureEnvelope::verify

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The envelope names a scheme this verifier does not implement.
    /// Verification must stop here rather than fall back to a weaker check.
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Invalid public key: {0}")]
    InvalidKey(String),

    #[error("Invalid signature encoding: {0}")]
    InvalidSignature(String),

    #[error("Canonicalization error: {0}")]
    Canonical(#[from] sigil_canonical::CanonicalError),
}
