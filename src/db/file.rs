// src/db/file.rs
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use super::{StoreBackend, StoreError};
use crate::crypto::hash_password;
use crate::models::CredentialRecord;

type CredentialTable = BTreeMap<String, CredentialRecord>;

/// File-backed credential store: the whole table lives in one JSON document.
///
/// Writes are whole-document read-modify-write, reads are whole-document
/// loads. A missing document is an empty table, and an unparseable one
/// degrades to an empty table with a logged warning rather than failing the
/// operation. That trades correctness for availability: a corrupt file loses
/// its records on the next write. No file locking is done, so a concurrent
/// external writer can lose updates (single-user tool, accepted).
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Bind the backend to a document path. The file is not created until the
    /// first `save`; until then every read sees an empty table.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn load(&self) -> CredentialTable {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return CredentialTable::new(),
            Err(e) => {
                log::warn!(
                    "could not read credential file {}: {e}; treating as empty",
                    self.path.display()
                );
                return CredentialTable::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(table) => table,
            Err(e) => {
                log::warn!(
                    "could not parse credential file {}: {e}; treating as empty",
                    self.path.display()
                );
                CredentialTable::new()
            }
        }
    }

    fn persist(&self, table: &CredentialTable) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(table)
            .map_err(|e| StoreError::Io(format!("serializing credential table: {e}")))?;
        fs::write(&self.path, raw).map_err(|e| {
            StoreError::Io(format!("writing {}: {e}", self.path.display()))
        })
    }
}

impl StoreBackend for FileBackend {
    fn save(&self, service: &str, plaintext: &str) -> Result<(), StoreError> {
        let digest = hash_password(plaintext);
        let mut table = self.load();

        match table.get_mut(service) {
            Some(record) => {
                record.password_hash = digest;
                log::info!("updated credential for '{service}' in {}", self.path.display());
            }
            None => {
                table.insert(
                    service.to_string(),
                    CredentialRecord {
                        password_hash: digest,
                        created_at: Utc::now(),
                    },
                );
                log::info!("stored credential for '{service}' in {}", self.path.display());
            }
        }

        self.persist(&table)
    }

    fn find(&self, service: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .load()
            .get(service)
            .map(|record| record.password_hash.clone()))
    }

    fn list_all(&self) -> Result<Vec<(String, String)>, StoreError> {
        // BTreeMap iterates in key order, which is the contract's ascending
        // service order.
        Ok(self
            .load()
            .into_iter()
            .map(|(service, record)| (service, record.password_hash))
            .collect())
    }

    fn delete(&self, service: &str) -> Result<bool, StoreError> {
        let mut table = self.load();
        if table.remove(service).is_none() {
            return Ok(false);
        }
        self.persist(&table)?;
        log::info!("deleted credential for '{service}' from {}", self.path.display());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn backend(dir: &TempDir) -> FileBackend {
        FileBackend::open(dir.path().join("creds.json"))
    }

    #[test]
    fn missing_document_reads_as_empty_table() {
        let dir = TempDir::new().unwrap();
        let store = backend(&dir);
        assert_eq!(store.find("gmail").unwrap(), None);
        assert!(store.list_all().unwrap().is_empty());
        assert!(!store.delete("gmail").unwrap());
    }

    #[test]
    fn save_then_find_returns_the_digest() {
        let dir = TempDir::new().unwrap();
        let store = backend(&dir);
        store.save("svc", "pw").unwrap();
        assert_eq!(store.find("svc").unwrap(), Some(hash_password("pw")));
    }

    #[test]
    fn save_is_an_upsert() {
        let dir = TempDir::new().unwrap();
        let store = backend(&dir);
        store.save("svc", "a").unwrap();
        store.save("svc", "b").unwrap();
        assert_eq!(store.find("svc").unwrap(), Some(hash_password("b")));
        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn upsert_preserves_created_at() {
        let dir = TempDir::new().unwrap();
        let store = backend(&dir);
        store.save("svc", "a").unwrap();
        let before = store.load()["svc"].created_at;
        store.save("svc", "b").unwrap();
        assert_eq!(store.load()["svc"].created_at, before);
    }

    #[test]
    fn list_is_ordered_by_service_ascending() {
        let dir = TempDir::new().unwrap();
        let store = backend(&dir);
        store.save("yandex", "pw1").unwrap();
        store.save("gmail", "pw2").unwrap();
        let services: Vec<_> = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|(service, _)| service)
            .collect();
        assert_eq!(services, vec!["gmail", "yandex"]);
    }

    #[test]
    fn delete_reports_whether_a_record_was_removed() {
        let dir = TempDir::new().unwrap();
        let store = backend(&dir);
        store.save("svc", "pw").unwrap();
        assert!(store.delete("svc").unwrap());
        assert_eq!(store.find("svc").unwrap(), None);
        assert!(!store.delete("svc").unwrap());
    }

    #[test]
    fn table_survives_reopening_the_backend() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("creds.json");
        FileBackend::open(&path).save("svc", "pw").unwrap();
        let reopened = FileBackend::open(&path);
        assert_eq!(reopened.find("svc").unwrap(), Some(hash_password("pw")));
    }

    #[test]
    fn corrupt_document_degrades_to_empty_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("creds.json");
        fs::write(&path, "not json {{{").unwrap();
        let store = FileBackend::open(&path);
        assert_eq!(store.find("svc").unwrap(), None);
        assert!(store.list_all().unwrap().is_empty());

        // The next write replaces the corrupt document with a valid one.
        store.save("svc", "pw").unwrap();
        assert_eq!(store.find("svc").unwrap(), Some(hash_password("pw")));
    }

    #[test]
    fn document_never_contains_plaintext() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("creds.json");
        FileBackend::open(&path)
            .save("svc", "hunter2-plaintext")
            .unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("hunter2-plaintext"));
        assert!(raw.contains(&hash_password("hunter2-plaintext")));
    }
}
