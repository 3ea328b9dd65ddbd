use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use employee_core::{AppError, AppResult};
use employee_domain::EmployeeId;

use crate::dto::{EmployeeRecordRequest, EmployeeRecordResponse, MessageResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRecordRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<EmployeeRecordResponse>)> {
    let Json(payload) = payload.map_err(json_rejection)?;

    let employee = state
        .employee_service
        .create_employee(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(EmployeeRecordResponse::from(employee))))
}

pub async fn get_employee_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<EmployeeRecordResponse>> {
    let employee = state
        .employee_service
        .get_employee(parse_employee_id(&raw_id)?)
        .await?;

    Ok(Json(EmployeeRecordResponse::from(employee)))
}

pub async fn update_employee_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<EmployeeRecordRequest>, JsonRejection>,
) -> ApiResult<Json<EmployeeRecordResponse>> {
    let id = parse_employee_id(&raw_id)?;
    let Json(payload) = payload.map_err(json_rejection)?;

    let employee = state
        .employee_service
        .update_employee(id, payload.into())
        .await?;

    Ok(Json(EmployeeRecordResponse::from(employee)))
}

pub async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .employee_service
        .delete_employee(parse_employee_id(&raw_id)?)
        .await?;

    Ok(Json(MessageResponse {
        message: "Employee deleted successfully",
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
