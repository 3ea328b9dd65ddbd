//! Employee and project records plus the full-name shape shared by both services.
//!
//! The data service stores a single `name` field; the gateway exposes first
//! name and surname separately. [`FullName`] is the only place that converts
//! between the two.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::RoleId;

/// Store-assigned employee identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Wraps a raw numeric identifier.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw numeric identifier.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for EmployeeId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Store-assigned project identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(i64);

impl ProjectId {
    /// Wraps a raw numeric identifier.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

/// A person's name as first name and surname.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FullName {
    first_name: String,
    surname: String,
}

impl FullName {
    /// Creates a name from its parts.
    #[must_use]
    pub fn new(first_name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            surname: surname.into(),
        }
    }

    /// Splits a joined name once on the first space.
    ///
    /// The remainder becomes the surname. A single word yields an empty
    /// surname and a missing name yields two empty parts.
    #[must_use]
    pub fn split(name: Option<&str>) -> Self {
        match name {
            None => Self::new("", ""),
            Some(name) => match name.split_once(' ') {
                Some((first_name, surname)) => Self::new(first_name, surname),
                None => Self::new(name, ""),
            },
        }
    }

    /// Joins the parts with a single space.
    #[must_use]
    pub fn joined(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Returns the surname, possibly empty.
    #[must_use]
    pub fn surname(&self) -> &str {
        self.surname.as_str()
    }
}

/// Persisted employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: EmployeeId,
    name: FullName,
    role_id: RoleId,
}

impl Employee {
    /// Creates an employee snapshot.
    #[must_use]
    pub fn new(id: EmployeeId, name: FullName, role_id: RoleId) -> Self {
        Self { id, name, role_id }
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &FullName {
        &self.name
    }

    /// Returns the referenced role.
    #[must_use]
    pub fn role_id(&self) -> RoleId {
        self.role_id
    }
}

/// Project owned by one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: ProjectId,
    name: String,
    employee_id: EmployeeId,
}

impl Project {
    /// Creates a project snapshot.
    #[must_use]
    pub fn new(id: ProjectId, name: impl Into<String>, employee_id: EmployeeId) -> Self {
        Self {
            id,
            name: name.into(),
            employee_id,
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the owning employee.
    #[must_use]
    pub fn employee_id(&self) -> EmployeeId {
        self.employee_id
    }

    /// Returns a copy owned by another employee.
    #[must_use]
    pub fn reassigned_to(&self, employee_id: EmployeeId) -> Self {
        Self {
            employee_id,
            ..self.clone()
        }
    }
}
