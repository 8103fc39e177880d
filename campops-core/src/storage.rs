use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use thiserror::Error;
use tracing::debug;

use crate::sqlite::configure_connection;

const CAMPOPS_SCHEMA: &str = include_str!("../../sql/campops.sql");

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage path not configured")]
    MissingPath,
    #[error("failed to open database at {path}: {source}")]
    OpenDatabase {
        path: PathBuf,
        source: rusqlite::Error,
    },
    #[error("schema initialization failed: {0}")]
    Initialization(#[from] rusqlite::Error),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Clone)]
pub struct StorageEngineBuilder {
    path: Option<PathBuf>,
    read_only: bool,
    create_if_missing: bool,
}

impl Default for StorageEngineBuilder {
    fn default() -> Self {
        Self {
            path: None,
            read_only: false,
            create_if_missing: true,
        }
    }
}

impl StorageEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn read_only(mut self, value: bool) -> Self {
        self.read_only = value;
        self
    }

    pub fn create_if_missing(mut self, value: bool) -> Self {
        self.create_if_missing = value;
        self
    }

    pub fn build(self) -> StorageResult<StorageEngine> {
        let path = self.path.ok_or(StorageError::MissingPath)?;
        let mut flags = if self.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE
        };
        if !self.read_only && self.create_if_missing {
            flags |= OpenFlags::SQLITE_OPEN_CREATE;
        }
        Ok(StorageEngine { path, flags })
    }
}

/// Owned handle to the single local store. Repositories receive a clone at
/// construction time instead of reaching for process-wide state, which keeps
/// isolated stores in tests cheap.
#[derive(Debug, Clone)]
pub struct StorageEngine {
    path: PathBuf,
    flags: OpenFlags,
}

impl StorageEngine {
    pub fn builder() -> StorageEngineBuilder {
        StorageEngineBuilder::new()
    }

    pub fn new(path: impl AsRef<Path>) -> StorageResult<Self> {
        StorageEngineBuilder::new().path(path).build()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn open(&self) -> StorageResult<Connection> {
        let conn = Connection::open_with_flags(&self.path, self.flags).map_err(|source| {
            StorageError::OpenDatabase {
                path: self.path.clone(),
                source,
            }
        })?;
        configure_connection(&conn).map_err(|source| StorageError::OpenDatabase {
            path: self.path.clone(),
            source,
        })?;
        Ok(conn)
    }

    /// Apply the embedded schema. Idempotent: safe to call on every startup.
    pub fn initialize(&self) -> StorageResult<()> {
        let conn = self.open()?;
        conn.execute_batch(CAMPOPS_SCHEMA)?;
        debug!(target: "storage", path = %self.path.display(), "schema initialized");
        Ok(())
    }
}
