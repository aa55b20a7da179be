//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical employee record and its wire format.
//! - Provide age derivation and load-boundary validation.
//!
//! # Invariants
//! - `id` is unique within a roster (enforced at the load boundary).
//! - `hire_date` is never earlier than `birth_date` for a valid record.
//! - Records never mutate after construction.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// Numeric identifier for one employee record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EmployeeId = u32;

/// Immutable record describing one person's employment data.
///
/// Constructed once at load time and held unchanged for the life of the
/// process; query operations only ever borrow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique numeric identifier within the roster.
    pub id: EmployeeId,
    /// Honorific, e.g. `"Mrs."`.
    pub title: String,
    pub first_name: String,
    /// Single-letter middle initial, per the source data feed.
    pub middle_initial: char,
    pub last_name: String,
    /// Single-letter gender code, e.g. `'F'`.
    pub gender: char,
    pub email: String,
    /// Serialized as an unpadded `M/D/YYYY` string, e.g. `"9/21/1982"`.
    #[serde(with = "us_date")]
    pub birth_date: NaiveDate,
    /// Serialized as an unpadded `M/D/YYYY` string.
    #[serde(with = "us_date")]
    pub hire_date: NaiveDate,
    /// Whole currency units, no cents.
    pub salary: u32,
}

impl Employee {
    /// Returns the employee's age in whole years on the given date.
    ///
    /// Counts a year only once the birthday has passed, so an employee born
    /// on 9/21/1982 is 39 on 9/20/2022 and 40 on 9/21/2022.
    pub fn age_on(&self, as_of: NaiveDate) -> i32 {
        let mut age = as_of.year() - self.birth_date.year();
        if (as_of.month(), as_of.day()) < (self.birth_date.month(), self.birth_date.day()) {
            age -= 1;
        }
        age
    }

    /// Checks record-level integrity rules.
    ///
    /// Called by the load boundary before a record enters a roster; query
    /// paths assume validated data and never re-check.
    ///
    /// # Errors
    /// - `ZeroId` when `id` is zero.
    /// - `EmptyLastName` when `last_name` is empty or whitespace.
    /// - `InvalidEmail` when `email` does not look like an address.
    /// - `HiredBeforeBirth` when `hire_date` precedes `birth_date`.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        if self.id == 0 {
            return Err(EmployeeValidationError::ZeroId);
        }
        if self.last_name.trim().is_empty() {
            return Err(EmployeeValidationError::EmptyLastName);
        }
        if !EMAIL_RE.is_match(&self.email) {
            return Err(EmployeeValidationError::InvalidEmail(self.email.clone()));
        }
        if self.hire_date < self.birth_date {
            return Err(EmployeeValidationError::HiredBeforeBirth {
                birth: self.birth_date,
                hire: self.hire_date,
            });
        }
        Ok(())
    }
}

/// Integrity violation for one employee record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeValidationError {
    ZeroId,
    EmptyLastName,
    InvalidEmail(String),
    HiredBeforeBirth { birth: NaiveDate, hire: NaiveDate },
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroId => write!(f, "employee id must be non-zero"),
            Self::EmptyLastName => write!(f, "employee last name must not be empty"),
            Self::InvalidEmail(email) => write!(f, "invalid employee email `{email}`"),
            Self::HiredBeforeBirth { birth, hire } => write!(
                f,
                "hire date {hire} precedes birth date {birth}"
            ),
        }
    }
}

impl Error for EmployeeValidationError {}

/// Serde adapter for the source feed's unpadded `M/D/YYYY` date strings.
mod us_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const PARSE_FORMAT: &str = "%m/%d/%Y";
    const DISPLAY_FORMAT: &str = "%-m/%-d/%Y";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DISPLAY_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, PARSE_FORMAT).map_err(serde::de::Error::custom)
    }
}
