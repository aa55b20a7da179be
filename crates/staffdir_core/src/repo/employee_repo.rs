//! Employee repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide the five read-only lookup operations over a fixed roster.
//! - Keep iteration order identical to roster construction order.
//!
//! # Invariants
//! - Employee ids are assumed unique; `employee_by_id` returns the first
//!   match and never scans past it.
//! - Range queries treat both bounds as inclusive; an inverted range simply
//!   matches nothing.
//! - No operation mutates state or signals an error for an empty result.

use crate::model::employee::{Employee, EmployeeId};
use chrono::{Local, NaiveDate};

/// Read-only query access to a roster of employee records.
///
/// All operations are pure reads over an immutable collection, so
/// implementations need no interior mutability or locking.
pub trait EmployeeRepository {
    /// Returns the employee with the given id, or `None` when absent.
    fn employee_by_id(&self, id: EmployeeId) -> Option<&Employee>;

    /// Returns all employees whose last name contains `fragment`, in roster
    /// order.
    ///
    /// The match is a case-sensitive exact substring check; an empty
    /// fragment matches every employee.
    fn employees_by_last_name_containing(&self, fragment: &str) -> Vec<&Employee>;

    /// Returns all employees hired within `[start, end]`, bounds inclusive.
    fn employees_by_hire_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Employee>;

    /// Returns all employees whose current age lies within
    /// `[min_age, max_age]`, bounds inclusive.
    ///
    /// Age is derived from the birth date against today's local date; see
    /// [`InMemoryEmployeeRepository::employees_by_age_range_on`] for a
    /// clock-independent variant.
    fn employees_by_age_range(&self, min_age: i32, max_age: i32) -> Vec<&Employee>;

    /// Returns all employees earning within `[min_salary, max_salary]`,
    /// bounds inclusive.
    fn employees_by_salary_range(&self, min_salary: u32, max_salary: u32) -> Vec<&Employee>;
}

/// Repository over a roster held fully in memory.
///
/// Owns its `Vec<Employee>` exclusively; every query is a linear scan, which
/// is the right trade for the small fixed rosters this serves.
pub struct InMemoryEmployeeRepository {
    employees: Vec<Employee>,
}

impl InMemoryEmployeeRepository {
    /// Builds a repository over an already-validated roster.
    ///
    /// Id uniqueness is the loader's concern; a roster with duplicate ids
    /// still works, with `employee_by_id` resolving to the first occurrence.
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    /// Returns the full roster in construction order.
    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Age-range query against an explicit reference date.
    ///
    /// The trait method delegates here with today's date; tests use this
    /// variant directly so results never depend on the wall clock.
    pub fn employees_by_age_range_on(
        &self,
        as_of: NaiveDate,
        min_age: i32,
        max_age: i32,
    ) -> Vec<&Employee> {
        self.filtered(|employee| {
            let age = employee.age_on(as_of);
            age >= min_age && age <= max_age
        })
    }

    fn filtered<P>(&self, predicate: P) -> Vec<&Employee>
    where
        P: Fn(&Employee) -> bool,
    {
        self.employees
            .iter()
            .filter(|employee| predicate(employee))
            .collect()
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn employee_by_id(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    fn employees_by_last_name_containing(&self, fragment: &str) -> Vec<&Employee> {
        self.filtered(|employee| employee.last_name.contains(fragment))
    }

    fn employees_by_hire_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Employee> {
        self.filtered(|employee| employee.hire_date >= start && employee.hire_date <= end)
    }

    fn employees_by_age_range(&self, min_age: i32, max_age: i32) -> Vec<&Employee> {
        self.employees_by_age_range_on(Local::now().date_naive(), min_age, max_age)
    }

    fn employees_by_salary_range(&self, min_salary: u32, max_salary: u32) -> Vec<&Employee> {
        self.filtered(|employee| employee.salary >= min_salary && employee.salary <= max_salary)
    }
}
