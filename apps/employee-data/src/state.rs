use employee_application::{EmployeeService, RoleService};
use sqlx::PgPool;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub employee_service: EmployeeService,
    pub role_service: RoleService,
    pub postgres_pool: PgPool,
}
