//! # Sigil Canonical
//!
//! Deterministic JSON serialization and hashing for Sigil signature envelopes.
//!
//! This crate provides:
//! - Canonical JSON serialization with sorted keys
//! - SHA256 hashing over the canonical form
//!
//! ## Canonical JSON Rules
//!
//! 1. Object keys sorted lexicographically by UTF-8 bytes
//! 2. Arrays preserve insertion order
//! 3. No whitespace
//! 4. UTF-8 encoding
//! 5. Numbers use `serde_json`'s native decimal formatting
//!
//! ## Example
//!
//! ```rust
//! use sigil_canonical::{to_canonical_json_string, hash_canonical};
//!
//! // Canonicalize JSON
//! let value = serde_json::json!({"b": 1, "a": 2});
//! let canonical = to_canonical_json_string(&value).unwrap();
//! assert_eq!(canonical, r#"{"a":2,"b":1}"#);
//!
//! // Hash content
//! let hash = hash_canonical(&value).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! ## Numbers
//!
//! Integers serialize as plain decimal; floats use the shortest decimal form
//! that round-trips (`serde_json`'s `ryu`-based formatting). The float grammar
//! is therefore host-native, not pinned across runtimes - callers that need a
//! cross-language canonical numeric form should encode such values as strings.

mod canonical;
mod error;
mod hash;

pub use canonical::*;
pub use error::*;
pub use hash::*;
