//! Cryptographic Utilities

use rand::{RngCore, rngs::OsRng};
use sha3::{Digest, Sha3_256};
use std::time::{SystemTime, UNIX_EPOCH};

/// Number of random bytes fed into each generated token.
const TOKEN_ENTROPY_BYTES: usize = 64;

/// Generate cryptographically secure random bytes
///
/// Aborts the process if the OS entropy source fails; there is no
/// meaningful way to continue issuing credentials without it.
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Compute SHA3-256 hash
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Generate an opaque, unguessable identifier
///
/// 64 bytes of OS entropy are combined with a nanosecond timestamp and
/// digested with SHA3-256, so the output carries no decodable meaning and
/// cannot collide in practice. Used for both record ids and session tokens.
///
/// Always call this at the point of use; token values must never be
/// captured once and reused across operations.
pub fn generate_token() -> String {
    let mut input = random_bytes(TOKEN_ENTROPY_BYTES);

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    input.extend_from_slice(format!("{:x}", nanos).as_bytes());

    hex::encode(sha3_256(&input))
}
