use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, State};
use employee_core::{AppError, AppResult};
use employee_domain::{EmployeeId, EmployeeOperation, Role};

use crate::dto::{EmployeeReadResponse, EmployeeRequest, EmployeeWriteResponse, MessageResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn create_employee_handler(
    State(state): State<AppState>,
    Extension(role): Extension<Role>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> ApiResult<Json<EmployeeWriteResponse>> {
    state
        .gateway_service
        .require_authority(role, EmployeeOperation::Create)?;
    let Json(payload) = payload.map_err(json_rejection)?;

    let created = state
        .gateway_service
        .create_employee(payload.with_role(role))
        .await?;

    Ok(Json(EmployeeWriteResponse::from(created)))
}

pub async fn get_employee_handler(
    State(state): State<AppState>,
    Extension(role): Extension<Role>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<EmployeeReadResponse>> {
    state
        .gateway_service
        .require_authority(role, EmployeeOperation::Read)?;
    let id = parse_employee_id(&raw_id)?;

    let employee = state.gateway_service.get_employee(id).await?;

    Ok(Json(EmployeeReadResponse::from(employee)))
}

pub async fn update_employee_handler(
    State(state): State<AppState>,
    Extension(role): Extension<Role>,
    Path(raw_id): Path<String>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> ApiResult<Json<EmployeeWriteResponse>> {
    state
        .gateway_service
        .require_authority(role, EmployeeOperation::Update)?;
    let id = parse_employee_id(&raw_id)?;
    let Json(payload) = payload.map_err(json_rejection)?;

    let updated = state
        .gateway_service
        .update_employee(id, payload.with_role(role))
        .await?;

    Ok(Json(EmployeeWriteResponse::from(updated)))
}

pub async fn delete_employee_handler(
    State(state): State<AppState>,
    Extension(role): Extension<Role>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .gateway_service
        .require_authority(role, EmployeeOperation::Delete)?;
    let id = parse_employee_id(&raw_id)?;

    state.gateway_service.delete_employee(id).await?;

    Ok(Json(MessageResponse {
        message: "Employee deleted successfully".to_owned(),
    }))
}

fn parse_employee_id(raw: &str) -> AppResult<EmployeeId> {
    raw.parse::<i64>()
        .map(EmployeeId::new)
        .map_err(|_| AppError::InvalidInput(format!("Invalid value for parameter 'id': {raw}")))
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    AppError::InvalidInput(format!("Malformed request body: {}", rejection.body_text()))
}
