use employee_application::{EmployeeApiRequest, EmployeeApiResponse};
use employee_domain::{Role, RoleId};
use serde::{Deserialize, Serialize};

/// Employee create/update body. The role comes from the `Role` header.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    pub first_name: Option<String>,
    pub surname: Option<String>,
}

impl EmployeeRequest {
    pub fn with_role(self, role: Role) -> EmployeeApiRequest {
        EmployeeApiRequest {
            first_name: self.first_name,
            surname: self.surname,
            role: Some(role.as_str().to_owned()),
        }
    }
}

/// Create/update projection carrying the numeric role.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeWriteResponse {
    pub id: i64,
    pub first_name: String,
    pub surname: String,
    pub role_id: RoleId,
}

impl From<EmployeeApiResponse> for EmployeeWriteResponse {
    fn from(value: EmployeeApiResponse) -> Self {
        Self {
            id: value.id.as_i64(),
            first_name: value.name.first_name().to_owned(),
            surname: value.name.surname().to_owned(),
            role_id: value.role.id(),
        }
    }
}

/// Read projection carrying the role name.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeReadResponse {
    pub id: i64,
    pub first_name: String,
    pub surname: String,
    pub role: Role,
}

impl From<EmployeeApiResponse> for EmployeeReadResponse {
    fn from(value: EmployeeApiResponse) -> Self {
        Self {
            id: value.id.as_i64(),
            first_name: value.name.first_name().to_owned(),
            surname: value.name.surname().to_owned(),
            role: value.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
