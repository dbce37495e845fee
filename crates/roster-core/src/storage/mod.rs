//! Storage layer
//!
//! The record list is mirrored to a versioned JSON envelope on disk.
//! Unusable persisted data (absent, stale version, undecodable) degrades to
//! "no snapshot"; only genuine I/O failures surface as errors, and callers
//! swallow those too.

pub mod error;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use persistence::{JsonFilePersistence, MemoryPersistence, Persist, SCHEMA_VERSION};
