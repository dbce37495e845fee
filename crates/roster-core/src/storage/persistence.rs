//! Employee snapshot persistence
//!
//! The store's record list is mirrored to a versioned JSON envelope under a
//! fixed file in the data directory. Writes are atomic (temp file, sync,
//! rename) so the file is never left half-written.
//!
//! Loading is forgiving by contract: an absent file, a version marker from a
//! different schema, or an undecodable payload all come back as `Ok(None)`.
//! Startup must never fail just because persisted data is unusable.

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::{StorageError, StorageResult};
use crate::models::Employee;

/// Schema version written into every envelope
///
/// A persisted envelope with any other version is treated as unusable;
/// there is no migration.
pub const SCHEMA_VERSION: u32 = 1;

/// Versioned envelope wrapping the persisted record slice
///
/// Only the employee list is persisted; transient UI state (filter, sort,
/// page) never lands here.
#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    employees: Vec<Employee>,
}

/// Durable mirror of the store's record list
///
/// `load` answers `Ok(None)` for anything that cannot be used; `save`
/// replaces the whole snapshot. Both are synchronous from the caller's
/// point of view.
pub trait Persist {
    /// Read the persisted snapshot, if a compatible one exists
    fn load(&self) -> StorageResult<Option<Vec<Employee>>>;

    /// Replace the persisted snapshot with the given record list
    fn save(&self, employees: &[Employee]) -> StorageResult<()>;
}

// Lets tests (and callers) hand the store a shared handle
impl<P: Persist> Persist for std::rc::Rc<P> {
    fn load(&self) -> StorageResult<Option<Vec<Employee>>> {
        (**self).load()
    }

    fn save(&self, employees: &[Employee]) -> StorageResult<()> {
        (**self).save(employees)
    }
}

/// File-backed persistence using a versioned JSON envelope
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    /// Create a persistence handler writing to the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The snapshot file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if a snapshot file exists on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl Persist for JsonFilePersistence {
    fn load(&self) -> StorageResult<Option<Vec<Employee>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path)
            .map_err(|e| StorageError::ReadError {
                path: self.path.clone(),
                source: e,
            })?;

        let envelope: Envelope = match serde_json::from_slice(&bytes) {
            Ok(env) => env,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring undecodable snapshot");
                return Ok(None);
            }
        };

        if envelope.version != SCHEMA_VERSION {
            warn!(
                path = %self.path.display(),
                found = envelope.version,
                expected = SCHEMA_VERSION,
                "Ignoring snapshot with incompatible schema version"
            );
            return Ok(None);
        }

        Ok(Some(envelope.employees))
    }

    fn save(&self, employees: &[Employee]) -> StorageResult<()> {
        let envelope = Envelope {
            version: SCHEMA_VERSION,
            employees: employees.to_vec(),
        };
        let bytes = serde_json::to_vec_pretty(&envelope).map_err(StorageError::Encode)?;

        atomic_write(&self.path, &bytes)
    }
}

/// In-memory persistence fake for tests and ephemeral runs
///
/// Holds the last saved snapshot; never fails.
#[derive(Default)]
pub struct MemoryPersistence {
    snapshot: RefCell<Option<Vec<Employee>>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the fake with an existing snapshot
    pub fn with_snapshot(employees: Vec<Employee>) -> Self {
        Self {
            snapshot: RefCell::new(Some(employees)),
        }
    }

    /// Number of records in the current snapshot, if any
    pub fn snapshot_len(&self) -> Option<usize> {
        self.snapshot.borrow().as_ref().map(|s| s.len())
    }
}

impl Persist for MemoryPersistence {
    fn load(&self) -> StorageResult<Option<Vec<Employee>>> {
        Ok(self.snapshot.borrow().clone())
    }

    fn save(&self, employees: &[Employee]) -> StorageResult<()> {
        *self.snapshot.borrow_mut() = Some(employees.to_vec());
        Ok(())
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::CreateDirectory {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");

    let mut file =
        File::create(&temp_path).map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    file.write_all(data)
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    file.sync_all()
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    fs::rename(&temp_path, path).map_err(|e| StorageError::from_io(e, path.to_path_buf()))?;

    Ok(())
}
