//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod employee;
mod role;

pub use employee::{Employee, EmployeeId, FullName, Project, ProjectId};
pub use role::{EmployeeOperation, ROLE_MAX_LENGTH, ROLE_MIN_LENGTH, Role, RoleId};
