//! Ed25519 key material and the signature provider capability.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;

use crate::error::EnvelopeError;

/// Identifier of the one signature scheme this crate implements.
pub const ALGORITHM: &str = "ed25519";

/// Signing capability injected into envelope creation.
///
/// Production code hands in a [`KeyPair`]; tests may hand in a provider built
/// from a fixed seed so signatures are reproducible.
pub trait SignatureProvider {
    /// Scheme identifier recorded in the envelope.
    fn algorithm(&self) -> &'static str;

    /// Sign raw bytes, returning the base64-encoded signature.
    fn sign_bytes(&self, data: &[u8]) -> String;

    /// Export the public key as base64 for embedding in the envelope.
    fn export_public_key(&self) -> String;
}

/// Ed25519 keypair for signing envelopes.
#[derive(Debug)]
pub struct KeyPair {
    signing_key: SigningKey,
}

impl KeyPair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        Self { signing_key }
    }

    /// Create a keypair from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// Create a keypair from a base64-encoded secret key.
    pub fn from_base64(encoded: &str) -> Result<Self, EnvelopeError> {
        let bytes = BASE64
            .decode(encoded)
            .map_err(|e| EnvelopeError::InvalidKey(format!("invalid base64: {}", e)))?;

        if bytes.len() != 32 {
            return Err(EnvelopeError::InvalidKey(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            )));
        }

        let mut seed = [0u8; 32];
        seed.copy_from_slice(&bytes);
        Ok(Self::from_seed(&seed))
    }

    /// Export the secret key as base64.
    pub fn secret_key_base64(&self) -> String {
        BASE64.encode(self.signing_key.to_bytes())
    }

    /// Get the public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            verifying_key: self.signing_key.verifying_key(),
        }
    }

    /// Short identifier for this keypair's public key.
    pub fn fingerprint(&self) -> String {
        self.public_key().fingerprint()
    }
}

impl SignatureProvider for KeyPair {
    fn algorithm(&self) -> &'static str {
        ALGORITHM
    }

    fn sign_bytes(&self, data: &[u8]) -> String {
        let signature = self.signing_key.sign(data);
        BASE64.encode(signature.to_bytes())
    }

    fn export_public_key(&self) -> String {
        self.public_key().to_base64()
    }
}

/// Public key for verifying envelopes.
#[derive(Debug, Clone)]
pub struct PublicKey {
    verifying_key: VerifyingKey,
}

impl PublicKey {
    /// Create from a base64-encoded public key.
    pub fn from_base64(encoded: &str) -> Result<Self, EnvelopeError> {
        let bytes = BASE64
            .decode(encoded)
            .map_err(|e| EnvelopeError::InvalidKey(format!("invalid base64: {}", e)))?;

        if bytes.len() != 32 {
            return Err(EnvelopeError::InvalidKey(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            )));
        }

        let mut key_bytes = [0u8; 32];
        key_bytes.copy_from_slice(&bytes);

        let verifying_key = VerifyingKey::from_bytes(&key_bytes)
            .map_err(|e| EnvelopeError::InvalidKey(format!("invalid public key: {}", e)))?;

        Ok(Self { verifying_key })
    }

    /// Export as base64.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.verifying_key.to_bytes())
    }

    /// Short identifier (first 8 hex chars of the SHA256 of the key bytes).
    pub fn fingerprint(&self) -> String {
        let hash = sigil_canonical::hash_bytes(&self.verifying_key.to_bytes());
        hash[..8].to_string()
    }

    /// Check a base64 signature against data.
    ///
    /// Returns `Ok(false)` when the signature is well-formed but does not
    /// match; `Err` only when the signature cannot be decoded at all.
    pub fn verify_bytes(&self, data: &[u8], signature_b64: &str) -> Result<bool, EnvelopeError> {
        let sig_bytes = decode_signature(signature_b64)?;
        let signature = Signature::from_bytes(&sig_bytes);

        Ok(self.verifying_key.verify(data, &signature).is_ok())
    }
}

/// Decode a base64 Ed25519 signature into its 64 raw bytes.
fn decode_signature(sig: &str) -> Result<[u8; 64], EnvelopeError> {
    let bytes = BASE64
        .decode(sig)
        .map_err(|e| EnvelopeError::InvalidSignature(format!("invalid base64: {}", e)))?;

    if bytes.len() != 64 {
        return Err(EnvelopeError::InvalidSignature(format!(
            "expected 64 bytes, got {}",
            bytes.len()
        )));
    }

    let mut sig_bytes = [0u8; 64];
    sig_bytes.copy_from_slice(&bytes);
    Ok(sig_bytes)
}
