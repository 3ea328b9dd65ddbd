use std::sync::Arc;

use employee_core::AppResult;
use employee_domain::{EmployeeId, Role, RoleId};
use tracing::info;

use crate::employee_ports::{RoleCascadeOutcome, RoleRepository};

/// Application service for the fixed role set.
#[derive(Clone)]
pub struct RoleService {
    roles: Arc<dyn RoleRepository>,
}

impl RoleService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(roles: Arc<dyn RoleRepository>) -> Self {
        Self { roles }
    }

    /// Deletes every employee holding `role_id` after moving their projects
    /// to `default_employee_id`. The role row itself is kept.
    pub async fn delete_role(
        &self,
        role_id: RoleId,
        default_employee_id: EmployeeId,
    ) -> AppResult<RoleCascadeOutcome> {
        info!(
            role_id = %role_id,
            default_employee_id = %default_employee_id,
            "deleting role employees"
        );

        let outcome = self
            .roles
            .delete_role_cascade(role_id, default_employee_id)
            .await?;

        info!(
            role_id = %role_id,
            deleted_employees = outcome.deleted_employees,
            reassigned_projects = outcome.reassigned_projects,
            "role cascade committed"
        );
        Ok(outcome)
    }

    /// Inserts ADMIN, USER and MANAGER when no role rows exist yet.
    /// Returns the number of inserted rows.
    pub async fn seed_default_roles(&self) -> AppResult<usize> {
        let existing = self.roles.count_roles().await?;
        if existing > 0 {
            info!(existing, "roles already seeded");
            return Ok(0);
        }

        for role in Role::all() {
            self.roles.insert_role(*role).await?;
        }

        info!(seeded = Role::all().len(), "seeded default roles");
        Ok(Role::all().len())
    }
}
