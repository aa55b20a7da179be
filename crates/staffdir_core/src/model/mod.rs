//! Domain model for employee directory records.
//!
//! # Responsibility
//! - Define the canonical employee record used by query logic.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - Every record is identified by a numeric `EmployeeId`.
//! - Records are immutable after construction; there is no update lifecycle.

pub mod employee;
