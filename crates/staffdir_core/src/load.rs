//! Roster construction boundary.
//!
//! # Responsibility
//! - Parse a JSON roster feed into validated `Employee` records.
//! - Enforce id uniqueness at the single point where the roster is built.
//!
//! # Invariants
//! - Every record entering a roster has passed `Employee::validate()`.
//! - A roster produced here contains no duplicate ids.
//! - Parsing never partially succeeds; the first bad record fails the load.

use crate::model::employee::{Employee, EmployeeId, EmployeeValidationError};
use log::info;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type LoadResult<T> = Result<T, LoadError>;

/// Error raised while building a roster from an external feed.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Validation {
        index: usize,
        source: EmployeeValidationError,
    },
    DuplicateId(EmployeeId),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "{err}"),
            Self::Validation { index, source } => {
                write!(f, "invalid employee record at index {index}: {source}")
            }
            Self::DuplicateId(id) => write!(f, "duplicate employee id {id} in roster feed"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Validation { source, .. } => Some(source),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Parses a JSON array of employee records into a validated roster.
///
/// # Errors
/// - `Json` when the feed is not a well-formed employee array.
/// - `Validation` with the offending index when a record breaks an
///   integrity rule.
/// - `DuplicateId` when two records share an id.
pub fn roster_from_json_str(json: &str) -> LoadResult<Vec<Employee>> {
    let employees: Vec<Employee> = serde_json::from_str(json)?;

    let mut seen_ids = HashSet::with_capacity(employees.len());
    for (index, employee) in employees.iter().enumerate() {
        employee
            .validate()
            .map_err(|source| LoadError::Validation { index, source })?;
        if !seen_ids.insert(employee.id) {
            return Err(LoadError::DuplicateId(employee.id));
        }
    }

    info!(
        "event=roster_loaded module=load status=ok count={}",
        employees.len()
    );

    Ok(employees)
}

/// Reads and parses a JSON roster file.
///
/// # Errors
/// - `Io` when the file cannot be read.
/// - Everything `roster_from_json_str` can return.
pub fn roster_from_json_file(path: &Path) -> LoadResult<Vec<Employee>> {
    let raw = std::fs::read_to_string(path)?;
    roster_from_json_str(&raw)
}
