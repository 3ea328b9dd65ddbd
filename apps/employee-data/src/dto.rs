use employee_application::{EmployeeRecordInput, RoleCascadeOutcome};
use employee_domain::{Employee, RoleId};
use serde::{Deserialize, Serialize};

/// Employee create/update body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecordRequest {
    pub name: Option<String>,
    pub role_id: Option<RoleId>,
}

impl From<EmployeeRecordRequest> for EmployeeRecordInput {
    fn from(value: EmployeeRecordRequest) -> Self {
        Self {
            name: value.name,
            role_id: value.role_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecordResponse {
    pub id: i64,
    pub name: String,
    pub role_id: RoleId,
}

impl From<Employee> for EmployeeRecordResponse {
    fn from(value: Employee) -> Self {
        Self {
            id: value.id().as_i64(),
            name: value.name().joined(),
            role_id: value.role_id(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDeletionQuery {
    pub default_employee_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDeletionResponse {
    pub message: &'static str,
    pub deleted_employees: u64,
    pub reassigned_projects: u64,
}

impl From<RoleCascadeOutcome> for RoleDeletionResponse {
    fn from(value: RoleCascadeOutcome) -> Self {
        Self {
            message: "Role and associated employees deleted. Projects reassigned.",
            deleted_employees: value.deleted_employees,
            reassigned_projects: value.reassigned_projects,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub postgres: HealthDependencyStatus,
}

#[derive(Debug, Serialize)]
pub struct HealthDependencyStatus {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
