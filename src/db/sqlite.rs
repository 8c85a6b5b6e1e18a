// src/db/sqlite.rs
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};

use super::{StoreBackend, StoreError};
use crate::crypto::hash_password;

/// SQLite-backed credential store.
///
/// The schema is provisioned at open time; a backend that fails to open never
/// reaches the caller, so there is no half-initialized state to guard against
/// later. Each operation runs on its own scoped connection, closed when the
/// operation returns, and leans on SQLite's per-statement transaction
/// semantics for durability. `service` uniqueness is enforced by the upsert
/// logic, not by a database constraint.
pub struct SqliteBackend {
    db_path: PathBuf,
}

impl SqliteBackend {
    /// Open (and if needed provision) the database at `db_path`.
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self, StoreError> {
        let db_path = db_path.as_ref().to_path_buf();

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Unavailable(format!(
                        "creating database directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let conn = Connection::open(&db_path).map_err(|e| {
            StoreError::Unavailable(format!("opening database {}: {e}", db_path.display()))
        })?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS passwords (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                service TEXT NOT NULL,
                password_hash TEXT NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .map_err(|e| StoreError::Unavailable(format!("creating passwords table: {e}")))?;

        log::info!("sqlite credential store ready at {}", db_path.display());
        Ok(Self { db_path })
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        Connection::open(&self.db_path).map_err(|e| {
            StoreError::Io(format!("opening database {}: {e}", self.db_path.display()))
        })
    }
}

impl StoreBackend for SqliteBackend {
    fn save(&self, service: &str, plaintext: &str) -> Result<(), StoreError> {
        let digest = hash_password(plaintext);
        let conn = self.connect()?;

        let existing: Option<i64> = conn
            .query_row(
                "SELECT id FROM passwords WHERE service = ?1",
                params![service],
                |row| row.get(0),
            )
            .optional()?;

        match existing {
            Some(id) => {
                conn.execute(
                    "UPDATE passwords SET password_hash = ?1 WHERE id = ?2",
                    params![digest, id],
                )?;
                log::info!("updated credential for '{service}'");
            }
            None => {
                conn.execute(
                    "INSERT INTO passwords (service, password_hash) VALUES (?1, ?2)",
                    params![service, digest],
                )?;
                log::info!("stored credential for '{service}'");
            }
        }
        Ok(())
    }

    fn find(&self, service: &str) -> Result<Option<String>, StoreError> {
        let conn = self.connect()?;
        let digest = conn
            .query_row(
                "SELECT password_hash FROM passwords WHERE service = ?1",
                params![service],
                |row| row.get(0),
            )
            .optional()?;
        Ok(digest)
    }

    fn list_all(&self) -> Result<Vec<(String, String)>, StoreError> {
        let conn = self.connect()?;
        let mut stmt =
            conn.prepare("SELECT service, password_hash FROM passwords ORDER BY service")?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        let mut all = Vec::new();
        for row in rows {
            all.push(row?);
        }
        Ok(all)
    }

    fn delete(&self, service: &str) -> Result<bool, StoreError> {
        let conn = self.connect()?;
        let affected = conn.execute(
            "DELETE FROM passwords WHERE service = ?1",
            params![service],
        )?;
        if affected > 0 {
            log::info!("deleted credential for '{service}'");
        }
        Ok(affected > 0)
    }
}
