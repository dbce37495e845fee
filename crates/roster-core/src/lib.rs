//! Roster Core Library
//!
//! This crate provides the core functionality for Roster, a local-first
//! employee record-keeping tool: an append-only record store mirrored to a
//! versioned JSON snapshot on disk, with a filter/sort/paginate projection
//! for the listing surface.
//!
//! # Quick Start
//!
//! ```text
//! let config = Config::load()?;
//! let persistence = JsonFilePersistence::new(config.employees_path());
//! let mut store = EmployeeStore::open(Box::new(persistence));
//!
//! let employee = form.validate()?;
//! store.append(employee);
//!
//! let page = view.project(store.records());
//! ```
//!
//! # Modules
//!
//! - `store`: append-only employee store (main entry point)
//! - `models`: employee record, state and department enumerations
//! - `form`: creation form validation
//! - `storage`: versioned snapshot persistence
//! - `projection`: filtered/sorted/paginated table view
//! - `debounce`: filter input debouncing
//! - `config`: application configuration

pub mod config;
pub mod debounce;
pub mod form;
pub mod models;
pub mod projection;
pub mod storage;
pub mod store;

pub use config::{Config, Language};
pub use debounce::Debouncer;
pub use form::{EmployeeForm, Field, ValidationErrors};
pub use models::{sample_employees, Department, Employee, UsState, US_STATES};
pub use projection::{Column, Page, SortDirection, TableView, PAGE_SIZES};
pub use storage::{JsonFilePersistence, MemoryPersistence, Persist, StorageError, SCHEMA_VERSION};
pub use store::EmployeeStore;
