//! Employee gateway composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod dto;
mod error;
mod handlers;
mod middleware;
mod state;

use std::sync::Arc;

use employee_application::EmployeeGatewayService;
use employee_core::AppError;
use employee_infrastructure::HttpEmployeeDataClient;
use tracing::info;

use crate::api_config::{ApiConfig, init_tracing};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let http_client = reqwest::Client::builder()
        .timeout(config.employee_data_timeout)
        .build()
        .map_err(|error| AppError::Internal(format!("failed to build HTTP client: {error}")))?;
    let data_client = Arc::new(HttpEmployeeDataClient::new(
        http_client,
        config.employee_data_url.clone(),
    ));

    let retry_policy = config.retry_policy();
    info!(
        employee_data_url = %config.employee_data_url,
        max_attempts = retry_policy.max_attempts(),
        delay_ms = u64::try_from(retry_policy.delay().as_millis()).unwrap_or(u64::MAX),
        "employee data client configured"
    );

    let app_state = AppState {
        gateway_service: EmployeeGatewayService::new(data_client, retry_policy),
    };
    let app = api_router::build_router(app_state);

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "employee-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}
