//! Employee CRUD for the data service.
//!
//! Incoming records carry a single joined `name`. It is validated here, split
//! into parts and written through [`EmployeeRepository`]. The referenced role
//! is checked before every write.

use std::collections::BTreeMap;
use std::sync::Arc;

use employee_core::{AppError, AppResult, NonEmptyString};
use employee_domain::{Employee, EmployeeId, FullName, RoleId};
use tracing::{info, warn};

use crate::employee_ports::{
    EmployeeRecordInput, EmployeeRepository, RoleRepository, SaveEmployeeInput,
};

/// Application service for stored employees.
#[derive(Clone)]
pub struct EmployeeService {
    employees: Arc<dyn EmployeeRepository>,
    roles: Arc<dyn RoleRepository>,
}

impl EmployeeService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(employees: Arc<dyn EmployeeRepository>, roles: Arc<dyn RoleRepository>) -> Self {
        Self { employees, roles }
    }

    /// Validates and stores a new employee.
    pub async fn create_employee(&self, input: EmployeeRecordInput) -> AppResult<Employee> {
        let input = self.validate_record(input).await?;
        let employee = self.employees.create_employee(input).await?;

        info!(
            employee_id = %employee.id(),
            role_id = %employee.role_id(),
            "employee stored"
        );
        Ok(employee)
    }

    /// Returns one employee.
    pub async fn get_employee(&self, id: EmployeeId) -> AppResult<Employee> {
        self.employees
            .find_employee(id)
            .await?
            .ok_or_else(|| employee_not_found(id))
    }

    /// Validates and replaces an existing employee.
    pub async fn update_employee(
        &self,
        id: EmployeeId,
        input: EmployeeRecordInput,
    ) -> AppResult<Employee> {
        let input = self.validate_record(input).await?;
        let employee = self
            .employees
            .update_employee(id, input)
            .await?
            .ok_or_else(|| employee_not_found(id))?;

        info!(employee_id = %id, role_id = %employee.role_id(), "employee updated");
        Ok(employee)
    }

    /// Deletes one employee.
    pub async fn delete_employee(&self, id: EmployeeId) -> AppResult<()> {
        if !self.employees.delete_employee(id).await? {
            return Err(employee_not_found(id));
        }

        info!(employee_id = %id, "employee deleted");
        Ok(())
    }

    async fn validate_record(&self, input: EmployeeRecordInput) -> AppResult<SaveEmployeeInput> {
        let mut violations = BTreeMap::new();

        let name = input
            .name
            .and_then(|name| NonEmptyString::new(name).ok());
        if name.is_none() {
            violations.insert("name".to_owned(), "Name must not be blank".to_owned());
        }
        if input.role_id.is_none() {
            violations.insert("roleId".to_owned(), "Role ID must not be null".to_owned());
        }

        let (Some(name), Some(role_id)) = (name, input.role_id) else {
            return Err(AppError::InvalidFields(violations));
        };

        self.require_role(role_id).await?;

        Ok(SaveEmployeeInput {
            name: FullName::split(Some(name.as_str())),
            role_id,
        })
    }

    async fn require_role(&self, role_id: RoleId) -> AppResult<()> {
        if self.roles.role_exists(role_id).await? {
            return Ok(());
        }

        warn!(role_id = %role_id, "employee write references unknown role");
        Err(AppError::InvalidInput(format!(
            "Role not found with ID: {role_id}"
        )))
    }
}

fn employee_not_found(id: EmployeeId) -> AppError {
    AppError::NotFound(format!("Employee not found with ID: {id}"))
}
