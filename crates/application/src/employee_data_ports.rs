use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use employee_core::AppResult;
use employee_domain::{EmployeeId, RoleId};

/// Storage-facing create/update payload sent to the data service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDataRequest {
    /// First name and surname joined by one space.
    pub name: String,
    /// Numeric role identifier.
    pub role_id: RoleId,
}

/// Employee payload returned by the data service.
///
/// Every field is optional on the wire; completeness is checked by the
/// gateway before the response is trusted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDataResponse {
    /// Store-assigned identifier.
    pub id: Option<EmployeeId>,
    /// Joined full name.
    pub name: Option<String>,
    /// Numeric role identifier.
    pub role_id: Option<RoleId>,
}

/// Port for calls from the gateway to the employee data service.
///
/// Implementations translate transport outcomes into the shared taxonomy:
/// an upstream 404 becomes `NotFound`, an upstream 400 becomes `InvalidInput`
/// carrying the upstream message, everything else becomes `Upstream`.
#[async_trait]
pub trait EmployeeDataClient: Send + Sync {
    /// Creates an employee. `None` means the upstream answered with an empty body.
    async fn create_employee(
        &self,
        request: &EmployeeDataRequest,
    ) -> AppResult<Option<EmployeeDataResponse>>;

    /// Fetches one employee.
    async fn fetch_employee(&self, id: EmployeeId) -> AppResult<Option<EmployeeDataResponse>>;

    /// Replaces one employee.
    async fn update_employee(
        &self,
        id: EmployeeId,
        request: &EmployeeDataRequest,
    ) -> AppResult<Option<EmployeeDataResponse>>;

    /// Deletes one employee.
    async fn delete_employee(&self, id: EmployeeId) -> AppResult<()>;
}
