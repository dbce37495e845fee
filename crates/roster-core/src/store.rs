//! Employee store
//!
//! The authoritative in-memory list of employee records. Append-only and
//! insertion-ordered; there is no update or delete. Every successful append
//! mirrors the whole list to the injected persistence handler, best-effort:
//! a failed write is logged and swallowed, never surfaced to the caller.
//!
//! ## Usage
//!
//! ```ignore
//! let store = EmployeeStore::open(Box::new(JsonFilePersistence::new(path)));
//!
//! store.append(employee);
//! let all = store.records();
//! ```

use tracing::warn;

use crate::models::{sample_employees, Employee};
use crate::storage::Persist;

/// In-memory, persistence-mirrored collection of employee records
pub struct EmployeeStore {
    employees: Vec<Employee>,
    persistence: Box<dyn Persist>,
}

impl EmployeeStore {
    /// Open the store, hydrating from the persisted snapshot
    ///
    /// An absent, stale, or unreadable snapshot degrades to an empty store.
    /// Opening never fails.
    pub fn open(persistence: Box<dyn Persist>) -> Self {
        let employees = match persistence.load() {
            Ok(Some(employees)) => employees,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Could not read persisted employees, starting empty");
                Vec::new()
            }
        };

        Self {
            employees,
            persistence,
        }
    }

    /// Open the store, seeding the demo records when no snapshot is usable
    ///
    /// First-run behavior: the seed is mirrored to persistence immediately so
    /// subsequent opens hydrate it back.
    pub fn open_seeded(persistence: Box<dyn Persist>) -> Self {
        let mut store = Self::open(persistence);
        if store.employees.is_empty() {
            store.employees = sample_employees();
            store.mirror();
        }
        store
    }

    /// Append a record to the end of the sequence
    ///
    /// The record must be fully formed; validation happens upstream in the
    /// form, so append itself has no failure path.
    pub fn append(&mut self, employee: Employee) {
        self.employees.push(employee);
        self.mirror();
    }

    /// All records, in insertion order
    pub fn records(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Mirror the current record list to persistence, best-effort
    fn mirror(&self) {
        if let Err(e) = self.persistence.save(&self.employees) {
            warn!(error = %e, "Could not persist employees, continuing in memory");
        }
    }
}
