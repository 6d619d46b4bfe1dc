//! Hashing utilities for artifact checksums.

use sha2::{Digest, Sha256};

/// Compute SHA256 hash of a byte slice.
pub fn sha256_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Compute SHA256 hash of a string.
pub fn sha256_str(s: &str) -> String {
    sha256_bytes(s.as_bytes())
}

/// First 12 hex digits of a checksum, for status lines.
pub fn short(checksum: &str) -> &str {
    checksum.get(..12).unwrap_or(checksum)
}
