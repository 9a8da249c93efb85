//! ID generation for todos
//!
//! Uses hash-based random IDs, short enough to type.
//! Format: xxxx (4 lowercase alphanumeric chars)

use crate::{Error, Result};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Length of a freshly generated ID
pub const ID_LENGTH: usize = 4;

/// Longest ID drawn before giving up
pub const MAX_ID_LENGTH: usize = 8;

/// Draws per length before switching to a longer ID
pub const MAX_ATTEMPTS_PER_LENGTH: usize = 16;

/// Generate a random ID of `len` characters
///
/// Uses UUID + timestamp hash, encoded as base32 lowercase.
/// A SHA-256 digest yields 52 base32 chars, so `len` is capped there.
pub fn generate_id(len: usize) -> String {
    let uuid = Uuid::new_v4();
    let timestamp = chrono::Utc::now().timestamp_nanos_opt().unwrap_or(0);

    let mut hasher = Sha256::new();
    hasher.update(uuid.as_bytes());
    hasher.update(timestamp.to_le_bytes());

    let hash = hasher.finalize();

    base32::encode(base32::Alphabet::Crockford, &hash)
        .to_lowercase()
        .chars()
        .take(len)
        .collect()
}

/// Generate an ID for which `taken` returns false
///
/// Starts at [`ID_LENGTH`] and grows by one character every
/// [`MAX_ATTEMPTS_PER_LENGTH`] collisions, up to [`MAX_ID_LENGTH`].
pub fn unique_id(taken: impl Fn(&str) -> bool) -> Result<String> {
    unique_id_with(taken, generate_id)
}

fn unique_id_with(
    taken: impl Fn(&str) -> bool,
    mut generate: impl FnMut(usize) -> String,
) -> Result<String> {
    let mut attempts = 0;
    for len in ID_LENGTH..=MAX_ID_LENGTH {
        for _ in 0..MAX_ATTEMPTS_PER_LENGTH {
            attempts += 1;
            let id = generate(len);
            if !taken(&id) {
                return Ok(id);
            }
            tracing::warn!(id = %id, attempts, "todo id collision, retrying");
        }
    }
    Err(Error::IdSpaceExhausted(attempts))
}
