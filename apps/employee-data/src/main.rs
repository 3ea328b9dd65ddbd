//! Employee data service composition root.

#![forbid(unsafe_code)]

mod data_config;
mod data_router;
mod database;
mod dto;
mod error;
mod handlers;
mod state;

use std::sync::Arc;

use employee_application::{EmployeeService, RoleService};
use employee_core::AppError;
use employee_infrastructure::{PostgresEmployeeRepository, PostgresRoleRepository};
use tracing::info;

use crate::data_config::{DataConfig, init_tracing};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = DataConfig::load()?;
    let pool =
        database::connect_and_migrate(&config.database_url, config.database_max_connections)
            .await?;

    if config.migrate_only {
        info!("database migrations applied successfully");
        return Ok(());
    }

    let employee_repository = Arc::new(PostgresEmployeeRepository::new(pool.clone()));
    let role_repository = Arc::new(PostgresRoleRepository::new(pool.clone()));

    let role_service = RoleService::new(role_repository.clone());
    role_service.seed_default_roles().await?;

    let app_state = AppState {
        employee_service: EmployeeService::new(employee_repository, role_repository),
        role_service,
        postgres_pool: pool,
    };
    let app = data_router::build_router(app_state);

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "employee-data listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("data server error: {error}")))
}
