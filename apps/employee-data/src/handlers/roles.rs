use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use employee_core::AppError;
use employee_domain::{EmployeeId, RoleId};

use crate::dto::{RoleDeletionQuery, RoleDeletionResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn delete_role_handler(
    State(state): State<AppState>,
    Path(raw_role_id): Path<String>,
    query: Result<Query<RoleDeletionQuery>, QueryRejection>,
) -> ApiResult<Json<RoleDeletionResponse>> {
    let role_id = raw_role_id.parse::<i64>().map(RoleId::new).map_err(|_| {
        AppError::InvalidInput(format!(
            "Invalid value for parameter 'roleId': {raw_role_id}"
        ))
    })?;
    let Query(query) = query.map_err(|rejection| {
        AppError::InvalidInput(format!(
            "Invalid value for parameter 'defaultEmployeeId': {}",
            rejection.body_text()
        ))
    })?;

    let outcome = state
        .role_service
        .delete_role(role_id, EmployeeId::new(query.default_employee_id))
        .await?;

    Ok(Json(RoleDeletionResponse::from(outcome)))
}
