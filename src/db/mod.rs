// src/db/mod.rs
use thiserror::Error;

pub mod file;
pub mod sqlite;

pub use file::FileBackend;
pub use sqlite::SqliteBackend;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage operation failed: {0}")]
    Io(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(error: rusqlite::Error) -> Self {
        StoreError::Io(error.to_string())
    }
}

/// The four-operation credential store contract, implemented by each backend.
///
/// Both backends must be caller-indistinguishable beyond the persistence
/// medium. Plaintext crosses this boundary once, into `save`, where it is
/// hashed before touching the medium; `find` and `list_all` only ever return
/// digests.
pub trait StoreBackend {
    /// Hash `plaintext` and upsert the record for `service`: overwrite the
    /// digest if a record exists, create one otherwise. The return value does
    /// not distinguish the two branches.
    fn save(&self, service: &str, plaintext: &str) -> Result<(), StoreError>;

    /// Look up the stored digest for an exact-match service key.
    fn find(&self, service: &str) -> Result<Option<String>, StoreError>;

    /// Every stored (service, digest) pair, ordered by service ascending.
    fn list_all(&self) -> Result<Vec<(String, String)>, StoreError>;

    /// Remove the record for `service`. Returns whether a record was actually
    /// removed; deleting an absent service is not an error.
    fn delete(&self, service: &str) -> Result<bool, StoreError>;
}

enum Backend {
    File(FileBackend),
    Sqlite(SqliteBackend),
}

/// A credential store bound to one concrete backend, selected at construction.
///
/// Callers hold a `CredentialStore` and never branch on which backend is
/// behind it. Service names are taken case-sensitively as given; rejecting
/// empty names is the calling layer's job, not the store's.
pub struct CredentialStore {
    backend: Backend,
}

impl CredentialStore {
    /// Open a store at `location`. A `sqlite:` prefix selects the relational
    /// backend; anything else is treated as a path to the file backend's JSON
    /// document.
    pub fn open(location: &str) -> Result<Self, StoreError> {
        let backend = match location.strip_prefix("sqlite:") {
            Some(db_path) => Backend::Sqlite(SqliteBackend::open(db_path)?),
            None => Backend::File(FileBackend::open(location)),
        };
        Ok(Self { backend })
    }

    fn backend(&self) -> &dyn StoreBackend {
        match &self.backend {
            Backend::File(backend) => backend,
            Backend::Sqlite(backend) => backend,
        }
    }

    pub fn save(&self, service: &str, plaintext: &str) -> Result<(), StoreError> {
        self.backend().save(service, plaintext)
    }

    pub fn find(&self, service: &str) -> Result<Option<String>, StoreError> {
        self.backend().find(service)
    }

    pub fn list_all(&self) -> Result<Vec<(String, String)>, StoreError> {
        self.backend().list_all()
    }

    pub fn delete(&self, service: &str) -> Result<bool, StoreError> {
        self.backend().delete(service)
    }

    pub fn backend_name(&self) -> &'static str {
        match &self.backend {
            Backend::File(_) => "file",
            Backend::Sqlite(_) => "sqlite",
        }
    }
}
