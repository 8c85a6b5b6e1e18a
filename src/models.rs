// src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored credential, keyed by service name in the surrounding table.
///
/// Only the digest is kept; the plaintext is hashed on the way in and never
/// persisted. `created_at` is set on first insert and survives later upserts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Password generation options.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub length: usize,
    pub use_digits: bool,
    pub use_special: bool,
    pub use_uppercase: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            use_digits: true,
            use_special: true,
            use_uppercase: true,
        }
    }
}
