//! Repository layer abstractions and in-memory implementation.
//!
//! # Responsibility
//! - Define the read-only query contract over employee records.
//! - Keep scan/filter details behind the repository boundary.
//!
//! # Invariants
//! - Queries never mutate the backing collection.
//! - Empty results are valid outcomes, never errors.

pub mod employee_repo;
