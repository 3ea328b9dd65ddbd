use std::collections::BTreeMap;

use employee_core::{AppError, AppResult};
use employee_domain::{EmployeeId, FullName, Role};

use crate::employee_data_ports::{EmployeeDataRequest, EmployeeDataResponse};

/// Human-facing employee request as received by the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeApiRequest {
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub surname: Option<String>,
    /// Raw role value, injected from the `Role` header.
    pub role: Option<String>,
}

/// Gateway request that passed field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEmployeeRequest {
    /// Name parts.
    pub name: FullName,
    /// Resolved role.
    pub role: Role,
}

/// Human-facing employee projection returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeApiResponse {
    /// Store-assigned identifier.
    pub id: EmployeeId,
    /// Name parts.
    pub name: FullName,
    /// Resolved role.
    pub role: Role,
}

impl EmployeeApiRequest {
    /// Validates every field and collects all violations.
    pub fn validate(&self) -> AppResult<ValidatedEmployeeRequest> {
        let mut violations = BTreeMap::new();

        let first_name = required_text(self.first_name.as_deref());
        if first_name.is_none() {
            violations.insert("firstName".to_owned(), "First name is required.".to_owned());
        }

        let surname = required_text(self.surname.as_deref());
        if surname.is_none() {
            violations.insert("surname".to_owned(), "Surname is required.".to_owned());
        }

        let role = match Role::parse(self.role.as_deref()) {
            Ok(role) => Some(role),
            Err(error) => {
                violations.insert("role".to_owned(), error.to_string());
                None
            }
        };

        match (first_name, surname, role) {
            (Some(first_name), Some(surname), Some(role)) if violations.is_empty() => {
                Ok(ValidatedEmployeeRequest {
                    name: FullName::new(first_name, surname),
                    role,
                })
            }
            _ => Err(AppError::InvalidFields(violations)),
        }
    }
}

impl ValidatedEmployeeRequest {
    /// Translates into the storage-facing shape.
    #[must_use]
    pub fn to_data_request(&self) -> EmployeeDataRequest {
        EmployeeDataRequest {
            name: self.name.joined(),
            role_id: self.role.id(),
        }
    }
}

/// Checks that an upstream response is present and complete, then maps it.
pub fn to_api_response(response: Option<EmployeeDataResponse>) -> AppResult<EmployeeApiResponse> {
    let response = response.ok_or_else(|| {
        AppError::Upstream(
            "Invalid response from employee data service: Response is null.".to_owned(),
        )
    })?;

    let (Some(id), Some(name), Some(role_id)) = (response.id, response.name, response.role_id)
    else {
        return Err(AppError::Upstream(
            "Invalid response from employee data service: Required fields are missing."
                .to_owned(),
        ));
    };

    Ok(EmployeeApiResponse {
        id,
        name: FullName::split(Some(name.as_str())),
        role: Role::from_id(role_id)?,
    })
}

fn required_text(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}
