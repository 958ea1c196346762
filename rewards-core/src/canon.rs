//! Canonical Serialization and Digests
//!
//! The device fingerprint is a digest over a canonical JSON encoding of
//! the collected signals. Canonical means: object keys sorted, no
//! whitespace, so the same signal set always hashes to the same value.

use crate::error::CoreResult;
use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

/// Serialize a value to canonical JSON bytes (sorted object keys).
pub fn stable_json_bytes<T: Serialize>(value: &T) -> CoreResult<Vec<u8>> {
    let raw = serde_json::to_value(value)?;
    let normalized = normalize_json_value(raw);
    Ok(serde_json::to_vec(&normalized)?)
}

/// SHA-256 over raw bytes, lowercase hex.
pub fn digest_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Canonical-JSON digest of a serializable value.
pub fn stable_json_digest_hex<T: Serialize>(value: &T) -> CoreResult<String> {
    let bytes = stable_json_bytes(value)?;
    Ok(digest_hex(&bytes))
}

fn normalize_json_value(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut sorted = Map::new();
            let mut entries: Vec<(String, Value)> = map
                .into_iter()
                .map(|(k, v)| (k, normalize_json_value(v)))
                .collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            for (k, v) in entries {
                sorted.insert(k, v);
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_json_value).collect()),
        other => other,
    }
}
