//! SHA256 hashing over canonical JSON

use crate::canonical::{to_canonical_json, to_canonical_json_value};
use crate::error::CanonicalError;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt::Write;

/// Hash raw bytes with SHA256
///
/// Returns a 64-character lowercase hex string.
///
/// # Example
///
/// ```rust
/// use sigil_canonical::hash_bytes;
///
/// let hash = hash_bytes(b"Hello, world!");
/// assert_eq!(hash.len(), 64);
/// assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();

    hex_encode(&result)
}

/// Canonicalize and hash a serializable value
///
/// Two values that are equal up to object key order hash identically, so the
/// result is usable as a content address for the logical value.
///
/// # Errors
///
/// Returns `CanonicalError` if `value` cannot be converted to JSON.
///
/// # Example
///
/// ```rust
/// use sigil_canonical::hash_canonical;
///
/// let hash1 = hash_canonical(&serde_json::json!({"b": 1, "a": 2})).unwrap();
/// let hash2 = hash_canonical(&serde_json::json!({"a": 2, "b": 1})).unwrap();
/// assert_eq!(hash1, hash2);
/// ```
pub fn hash_canonical<T: Serialize>(value: &T) -> Result<String, CanonicalError> {
    let canonical = to_canonical_json(value)?;
    Ok(hash_bytes(&canonical))
}

/// Hash a `serde_json::Value` after canonicalization
pub fn hash_canonical_value(value: &serde_json::Value) -> String {
    hash_bytes(&to_canonical_json_value(value))
}

/// Convert bytes to lowercase hex string
fn hex_encode(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        write!(hex, "{:02x}", byte).unwrap();
    }
    hex
}
