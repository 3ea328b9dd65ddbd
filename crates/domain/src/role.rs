use std::fmt::{Display, Formatter};

use employee_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Minimum accepted length of a raw role value.
pub const ROLE_MIN_LENGTH: usize = 3;

/// Maximum accepted length of a raw role value.
pub const ROLE_MAX_LENGTH: usize = 50;

const ROLE_REQUIRED_MESSAGE: &str =
    "Role is required and cannot be null or blank. Allowed roles are ADMIN, USER, MANAGER.";

/// Numeric role identifier as stored by the data service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(i64);

impl RoleId {
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

impl Display for RoleId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Caller roles recognised by both services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Regular user.
    User,
    /// Manager.
    Manager,
}

impl Role {
    /// Returns the canonical uppercase name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
            Self::Manager => "MANAGER",
        }
    }

    /// Returns all roles in seed order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[Role::Admin, Role::User, Role::Manager];

        ALL
    }

    /// Validates a raw role value, typically a header or request field.
    ///
    /// Checks run in order: presence, length bounds, membership. The same
    /// messages are produced regardless of which layer calls this.
    pub fn parse(value: Option<&str>) -> AppResult<Self> {
        let Some(value) = value.filter(|value| !value.trim().is_empty()) else {
            return Err(AppError::InvalidInput(ROLE_REQUIRED_MESSAGE.to_owned()));
        };

        let length = value.chars().count();
        if !(ROLE_MIN_LENGTH..=ROLE_MAX_LENGTH).contains(&length) {
            return Err(AppError::InvalidInput(format!(
                "Invalid 'Role' length. Must be between {ROLE_MIN_LENGTH} and {ROLE_MAX_LENGTH} characters."
            )));
        }

        match value.to_uppercase().as_str() {
            "ADMIN" => Ok(Self::Admin),
            "USER" => Ok(Self::User),
            "MANAGER" => Ok(Self::Manager),
            _ => Err(AppError::InvalidInput(format!(
                "Invalid role: {value}. Allowed roles are ADMIN, USER, MANAGER."
            ))),
        }
    }

    /// Returns the fixed storage identifier.
    #[must_use]
    pub fn id(&self) -> RoleId {
        match self {
            Self::Admin => RoleId(1),
            Self::User => RoleId(2),
            Self::Manager => RoleId(3),
        }
    }

    /// Resolves a storage identifier back into a role.
    pub fn from_id(role_id: RoleId) -> AppResult<Self> {
        match role_id.as_i64() {
            1 => Ok(Self::Admin),
            2 => Ok(Self::User),
            3 => Ok(Self::Manager),
            _ => Err(AppError::InvalidInput(format!(
                "Invalid role ID: {role_id}"
            ))),
        }
    }

    /// Returns whether this role may perform the given gateway operation.
    #[must_use]
    pub fn can_perform(&self, operation: EmployeeOperation) -> bool {
        operation.allowed_roles().contains(self)
    }
}

impl Display for Role {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Employee operations exposed by the gateway, each guarded by a role set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeOperation {
    /// Create an employee.
    Create,
    /// Read an employee by id.
    Read,
    /// Update an employee by id.
    Update,
    /// Delete an employee by id.
    Delete,
}

impl EmployeeOperation {
    /// Returns the roles granted this operation.
    #[must_use]
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Self::Create | Self::Delete => &[Role::Admin],
            Self::Read => &[Role::Admin, Role::User],
            Self::Update => &[Role::User],
        }
    }

    /// Returns a stable name for logging.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "employee.create",
            Self::Read => "employee.read",
            Self::Update => "employee.update",
            Self::Delete => "employee.delete",
        }
    }
}
