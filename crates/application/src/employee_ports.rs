use async_trait::async_trait;

use employee_core::AppResult;
use employee_domain::{Employee, EmployeeId, FullName, Role, RoleId};

/// Validated payload for inserting or replacing an employee row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveEmployeeInput {
    /// Name parts as stored.
    pub name: FullName,
    /// Referenced role, already checked to exist.
    pub role_id: RoleId,
}

/// Unvalidated employee payload as received by the data service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeRecordInput {
    /// Joined full name.
    pub name: Option<String>,
    /// Referenced role.
    pub role_id: Option<RoleId>,
}

/// Counts reported by a role-deletion cascade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleCascadeOutcome {
    /// Employees removed because they held the role.
    pub deleted_employees: u64,
    /// Projects moved to the default employee.
    pub reassigned_projects: u64,
}

/// Repository port for employee persistence.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Inserts an employee and returns the stored row.
    async fn create_employee(&self, input: SaveEmployeeInput) -> AppResult<Employee>;

    /// Finds one employee.
    async fn find_employee(&self, id: EmployeeId) -> AppResult<Option<Employee>>;

    /// Replaces one employee. Returns `None` when the row does not exist.
    async fn update_employee(
        &self,
        id: EmployeeId,
        input: SaveEmployeeInput,
    ) -> AppResult<Option<Employee>>;

    /// Deletes one employee. Returns `false` when the row does not exist.
    async fn delete_employee(&self, id: EmployeeId) -> AppResult<bool>;
}

/// Repository port for the fixed role set and the role-deletion cascade.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Returns whether a role row exists.
    async fn role_exists(&self, role_id: RoleId) -> AppResult<bool>;

    /// Counts stored role rows.
    async fn count_roles(&self) -> AppResult<u64>;

    /// Inserts one role row under its fixed identifier.
    async fn insert_role(&self, role: Role) -> AppResult<()>;

    /// Atomically reassigns projects of every employee holding `role_id` to
    /// `default_employee_id`, then deletes those employees.
    ///
    /// Fails with `NotFound` when the role is missing and with `InvalidInput`
    /// when the default employee is missing or holds the role. On any failure
    /// nothing is changed.
    async fn delete_role_cascade(
        &self,
        role_id: RoleId,
        default_employee_id: EmployeeId,
    ) -> AppResult<RoleCascadeOutcome>;
}
