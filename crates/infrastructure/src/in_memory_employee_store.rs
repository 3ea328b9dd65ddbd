use std::collections::BTreeMap;

use async_trait::async_trait;
use employee_application::{
    EmployeeRepository, RoleCascadeOutcome, RoleRepository, SaveEmployeeInput,
};
use employee_core::{AppError, AppResult};
use employee_domain::{Employee, EmployeeId, Project, ProjectId, Role, RoleId};
use tokio::sync::RwLock;

/// In-memory employee, role and project store.
///
/// Mirrors the relational schema's foreign keys: employees must reference an
/// existing role and projects an existing employee.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    state: RwLock<StoreState>,
}

#[derive(Debug, Default)]
struct StoreState {
    roles: BTreeMap<RoleId, Role>,
    employees: BTreeMap<EmployeeId, Employee>,
    projects: BTreeMap<ProjectId, Project>,
    last_employee_id: i64,
    last_project_id: i64,
}

impl InMemoryEmployeeStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a project owned by an existing employee.
    pub async fn insert_project(
        &self,
        name: impl Into<String> + Send,
        employee_id: EmployeeId,
    ) -> AppResult<Project> {
        let mut state = self.state.write().await;
        if !state.employees.contains_key(&employee_id) {
            return Err(AppError::Internal(format!(
                "project references missing employee {employee_id}"
            )));
        }

        state.last_project_id += 1;
        let project = Project::new(ProjectId::new(state.last_project_id), name, employee_id);
        state.projects.insert(project.id(), project.clone());
        Ok(project)
    }

    /// Lists every project ordered by identifier.
    pub async fn list_projects(&self) -> Vec<Project> {
        self.state.read().await.projects.values().cloned().collect()
    }
}

impl StoreState {
    fn require_role(&self, role_id: RoleId) -> AppResult<()> {
        if self.roles.contains_key(&role_id) {
            return Ok(());
        }

        Err(AppError::Internal(format!(
            "employee references missing role {role_id}"
        )))
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeStore {
    async fn create_employee(&self, input: SaveEmployeeInput) -> AppResult<Employee> {
        let mut state = self.state.write().await;
        state.require_role(input.role_id)?;

        state.last_employee_id += 1;
        let employee = Employee::new(
            EmployeeId::new(state.last_employee_id),
            input.name,
            input.role_id,
        );
        state.employees.insert(employee.id(), employee.clone());
        Ok(employee)
    }

    async fn find_employee(&self, id: EmployeeId) -> AppResult<Option<Employee>> {
        Ok(self.state.read().await.employees.get(&id).cloned())
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        input: SaveEmployeeInput,
    ) -> AppResult<Option<Employee>> {
        let mut state = self.state.write().await;
        state.require_role(input.role_id)?;

        let Some(stored) = state.employees.get_mut(&id) else {
            return Ok(None);
        };
        *stored = Employee::new(id, input.name, input.role_id);
        Ok(Some(stored.clone()))
    }

    async fn delete_employee(&self, id: EmployeeId) -> AppResult<bool> {
        let mut state = self.state.write().await;
        if !state.employees.contains_key(&id) {
            return Ok(false);
        }
        if state
            .projects
            .values()
            .any(|project| project.employee_id() == id)
        {
            return Err(AppError::Internal(format!(
                "employee {id} still owns projects"
            )));
        }

        state.employees.remove(&id);
        Ok(true)
    }
}

#[async_trait]
impl RoleRepository for InMemoryEmployeeStore {
    async fn role_exists(&self, role_id: RoleId) -> AppResult<bool> {
        Ok(self.state.read().await.roles.contains_key(&role_id))
    }

    async fn count_roles(&self) -> AppResult<u64> {
        Ok(self.state.read().await.roles.len() as u64)
    }

    async fn insert_role(&self, role: Role) -> AppResult<()> {
        self.state.write().await.roles.entry(role.id()).or_insert(role);
        Ok(())
    }

    async fn delete_role_cascade(
        &self,
        role_id: RoleId,
        default_employee_id: EmployeeId,
    ) -> AppResult<RoleCascadeOutcome> {
        let mut state = self.state.write().await;

        if !state.roles.contains_key(&role_id) {
            return Err(AppError::NotFound(format!(
                "Role not found with ID: {role_id}"
            )));
        }
        match state.employees.get(&default_employee_id) {
            None => {
                return Err(AppError::InvalidInput(format!(
                    "Default employee not found with ID: {default_employee_id}"
                )));
            }
            Some(default_employee) if default_employee.role_id() == role_id => {
                return Err(AppError::InvalidInput(format!(
                    "Default employee {default_employee_id} holds role {role_id} and would be deleted"
                )));
            }
            Some(_) => {}
        }

        let StoreState {
            employees,
            projects,
            ..
        } = &mut *state;

        let mut reassigned_projects = 0_u64;
        for project in projects.values_mut() {
            let owner_holds_role = employees
                .get(&project.employee_id())
                .is_some_and(|owner| owner.role_id() == role_id);
            if owner_holds_role {
                *project = project.reassigned_to(default_employee_id);
                reassigned_projects += 1;
            }
        }

        let before = employees.len();
        employees.retain(|_, employee| employee.role_id() != role_id);
        let deleted_employees = (before - employees.len()) as u64;

        Ok(RoleCascadeOutcome {
            deleted_employees,
            reassigned_projects,
        })
    }
}
