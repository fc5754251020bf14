//! Session key fingerprinting for operational visibility.
//!
//! The server logs a truncated SHA-256 of the signing half of the session key
//! at startup, so operators can tell which key a replica loaded without the
//! key material reaching the logs.

use actix_web::cookie::Key;
use sha2::{Digest, Sha256};

/// Digest bytes kept before hex encoding.
const FINGERPRINT_BYTES: usize = 8;

/// Lower-case hex fingerprint of `key`'s signing material.
///
/// # Examples
///
/// ```rust
/// use actix_web::cookie::Key;
/// use booknest::inbound::http::session_config::fingerprint::key_fingerprint;
///
/// let fp = key_fingerprint(&Key::generate());
/// assert_eq!(fp.len(), 16);
/// assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn key_fingerprint(key: &Key) -> String {
    let digest = Sha256::digest(key.signing());
    hex::encode(&digest[..FINGERPRINT_BYTES])
}
