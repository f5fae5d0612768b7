//! The signature envelope: payload, metadata, and a signature over the
//! payload's canonical form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sigil_canonical::to_canonical_json_value;

use crate::error::EnvelopeError;
use crate::keys::{PublicKey, SignatureProvider, ALGORITHM};

/// Current envelope format version.
pub const ENVELOPE_VERSION: u32 = 1;

/// Signature material embedded in an envelope.
///
/// `public_key` makes the envelope self-verifying; establishing trust in that
/// key (pinning, certificate chain) is the caller's problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureBlock {
    /// Scheme identifier. Informational: the verifier implements exactly one
    /// scheme and refuses anything else rather than negotiating.
    pub algorithm: String,

    /// Base64-exported public key of the signer.
    ///
    /// Serialized as `publicKey` to match envelopes from other producers.
    #[serde(rename = "publicKey")]
    pub public_key: String,

    /// Base64 signature over the payload's canonical bytes.
    pub value: String,
}

/// A signed payload.
///
/// The signature covers `canonicalize(payload)` only - never the whole
/// envelope and never any pre-serialized text - so the envelope itself can be
/// re-serialized freely (field order, whitespace) without invalidating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureEnvelope {
    pub version: u32,

    /// Creation time. Informational only; not covered by the signature.
    pub timestamp: DateTime<Utc>,

    /// The object of trust.
    pub payload: Value,

    pub signature: SignatureBlock,
}

impl SignatureEnvelope {
    /// Sign a payload value, producing a self-verifying envelope.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sigil_envelope::{KeyPair, SignatureEnvelope};
    ///
    /// let keypair = KeyPair::generate();
    /// let payload = serde_json::json!({"id": 1, "name": "backup"});
    ///
    /// let envelope = SignatureEnvelope::sign_value(payload, &keypair);
    /// assert!(envelope.verify().unwrap());
    /// ```
    pub fn sign_value(payload: Value, provider: &impl SignatureProvider) -> Self {
        let bytes = to_canonical_json_value(&payload);
        let value = provider.sign_bytes(&bytes);

        Self {
            version: ENVELOPE_VERSION,
            timestamp: Utc::now(),
            payload,
            signature: SignatureBlock {
                algorithm: provider.algorithm().to_string(),
                public_key: provider.export_public_key(),
                value,
            },
        }
    }

    /// Sign any serializable payload.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::Canonical` if `payload` cannot be represented
    /// as a JSON value.
    pub fn sign<T: Serialize>(
        payload: &T,
        provider: &impl SignatureProvider,
    ) -> Result<Self, EnvelopeError> {
        let value = serde_json::to_value(payload)
            .map_err(sigil_canonical::CanonicalError::from)?;
        Ok(Self::sign_value(value, provider))
    }

    /// Verify the envelope against its embedded public key.
    ///
    /// The canonical bytes are always recomputed from the live `payload`
    /// field, never taken from any stored serialization, so any mutation of
    /// the payload after signing is caught.
    ///
    /// Returns `Ok(true)` when the signature matches, `Ok(false)` when it
    /// does not (wrong key, tampered payload), and `Err` when the envelope
    /// cannot be evaluated at all (unknown algorithm, undecodable key or
    /// signature).
    pub fn verify(&self) -> Result<bool, EnvelopeError> {
        if self.signature.algorithm != ALGORITHM {
            return Err(EnvelopeError::UnsupportedAlgorithm(
                self.signature.algorithm.clone(),
            ));
        }

        let public_key = PublicKey::from_base64(&self.signature.public_key)?;
        let bytes = to_canonical_json_value(&self.payload);

        public_key.verify_bytes(&bytes, &self.signature.value)
    }

    /// Short identifier of the embedded signing key.
    pub fn signer_fingerprint(&self) -> Result<String, EnvelopeError> {
        Ok(PublicKey::from_base64(&self.signature.public_key)?.fingerprint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KeyPair;
    use serde_json::json;

    #[test]
    fn test_sign_populates_envelope() {
        let kp = KeyPair::from_seed(&[1u8; 32]);
        let envelope = SignatureEnvelope::sign_value(json!({"a": 1}), &kp);

        assert_eq!(envelope.version, ENVELOPE_VERSION);
        assert_eq!(envelope.signature.algorithm, "ed25519");
        assert_eq!(envelope.signature.public_key, kp.public_key().to_base64());
        assert!(!envelope.signature.value.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let kp = KeyPair::generate();
        let envelope = SignatureEnvelope::sign_value(json!({"id": 7, "ok": true}), &kp);

        assert!(envelope.verify().unwrap());
    }

    #[test]
    fn test_sign_serializable_struct() {
        #[derive(Serialize)]
        struct Backup {
            id: u64,
            entries: Vec<String>,
        }

        let kp = KeyPair::generate();
        let backup = Backup {
            id: 3,
            entries: vec!["a".into(), "b".into()],
        };

        let envelope = SignatureEnvelope::sign(&backup, &kp).unwrap();
        assert!(envelope.verify().unwrap());
        assert_eq!(envelope.payload["id"], json!(3));
    }

    #[test]
    fn test_tampered_payload_fails() {
        let kp = KeyPair::generate();
        let mut envelope = SignatureEnvelope::sign_value(json!({"amount": 100}), &kp);

        envelope.payload["amount"] = json!(100000);
        assert!(!envelope.verify().unwrap());
    }

    #[test]
    fn test_unsupported_algorithm_is_an_error() {
        let kp = KeyPair::generate();
        let mut envelope = SignatureEnvelope::sign_value(json!({"a": 1}), &kp);

        envelope.signature.algorithm = "RSA-PSS-SHA256".to_string();
        assert!(matches!(
            envelope.verify(),
            Err(EnvelopeError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn test_corrupt_key_is_an_error_not_false() {
        let kp = KeyPair::generate();
        let mut envelope = SignatureEnvelope::sign_value(json!({"a": 1}), &kp);

        envelope.signature.public_key = "@@@not-base64@@@".to_string();
        assert!(matches!(
            envelope.verify(),
            Err(EnvelopeError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_corrupt_signature_is_an_error_not_false() {
        let kp = KeyPair::generate();
        let mut envelope = SignatureEnvelope::sign_value(json!({"a": 1}), &kp);

        envelope.signature.value = "@@@not-base64@@@".to_string();
        assert!(matches!(
            envelope.verify(),
            Err(EnvelopeError::InvalidSignature(_))
        ));
    }

    #[test]
    fn test_timestamp_is_not_signed() {
        let kp = KeyPair::generate();
        let mut envelope = SignatureEnvelope::sign_value(json!({"a": 1}), &kp);

        // Timestamp is informational metadata; changing it must not
        // invalidate the signature.
        envelope.timestamp = envelope.timestamp + chrono::Duration::days(30);
        assert!(envelope.verify().unwrap());
    }

    #[test]
    fn test_public_key_wire_name() {
        let kp = KeyPair::from_seed(&[2u8; 32]);
        let envelope = SignatureEnvelope::sign_value(json!({"a": 1}), &kp);

        let wire = serde_json::to_value(&envelope).unwrap();
        assert_eq!(wire["signature"]["publicKey"], json!(kp.public_key().to_base64()));
        assert!(wire["signature"].get("public_key").is_none());

        let decoded: SignatureEnvelope = serde_json::from_value(wire).unwrap();
        assert!(decoded.verify().unwrap());
    }

    #[test]
    fn test_signer_fingerprint() {
        let kp = KeyPair::generate();
        let envelope = SignatureEnvelope::sign_value(json!({}), &kp);

        assert_eq!(envelope.signer_fingerprint().unwrap(), kp.fingerprint());
    }
}
