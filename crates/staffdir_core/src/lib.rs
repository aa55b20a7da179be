//! Core domain logic for StaffDir.
//! This crate is the single source of truth for roster query semantics.

pub mod load;
pub mod logging;
pub mod model;
pub mod repo;

pub use load::{roster_from_json_file, roster_from_json_str, LoadError, LoadResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{Employee, EmployeeId, EmployeeValidationError};
pub use repo::employee_repo::{EmployeeRepository, InMemoryEmployeeRepository};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
