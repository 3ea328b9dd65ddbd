use std::sync::Arc;

use employee_core::{AppError, AppResult};
use employee_domain::{EmployeeId, EmployeeOperation, Role};
use tracing::{error, info, warn};

use crate::employee_data_ports::EmployeeDataClient;
use crate::employee_mapper::{EmployeeApiRequest, EmployeeApiResponse, to_api_response};
use crate::retry_policy::{RetryFailure, RetryPolicy};

/// Message returned when a valid role lacks authority for an operation.
pub const ACCESS_DENIED_MESSAGE: &str = "Access Denied";

/// Gateway use-cases: validate, translate, delegate to the data service.
#[derive(Clone)]
pub struct EmployeeGatewayService {
    client: Arc<dyn EmployeeDataClient>,
    retry_policy: RetryPolicy,
}

impl EmployeeGatewayService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(client: Arc<dyn EmployeeDataClient>, retry_policy: RetryPolicy) -> Self {
        Self {
            client,
            retry_policy,
        }
    }

    /// Ensures the caller role may perform the operation.
    pub fn require_authority(&self, role: Role, operation: EmployeeOperation) -> AppResult<()> {
        if role.can_perform(operation) {
            return Ok(());
        }

        warn!(
            role = %role,
            operation = operation.as_str(),
            "role lacks authority for operation"
        );
        Err(AppError::Forbidden(ACCESS_DENIED_MESSAGE.to_owned()))
    }

    /// Creates an employee upstream, retrying per the configured policy.
    ///
    /// Field validation happens once, before the first attempt. Each attempt
    /// covers the call and the response check; once the budget is spent the
    /// caller sees only the recovery error, never the last raw cause.
    pub async fn create_employee(
        &self,
        request: EmployeeApiRequest,
    ) -> AppResult<EmployeeApiResponse> {
        let validated = request.validate()?;
        info!(role = %validated.role, "creating employee");

        let data_request = validated.to_data_request();
        let client = &self.client;
        let data_request = &data_request;

        let outcome = self
            .retry_policy
            .run("create_employee", move |_| async move {
                let response = client.create_employee(data_request).await?;
                to_api_response(response)
            })
            .await;

        match outcome {
            Ok(response) => {
                info!(employee_id = %response.id, "employee created");
                Ok(response)
            }
            Err(RetryFailure::Aborted(error)) => Err(error),
            Err(RetryFailure::Exhausted {
                attempts,
                last_error,
            }) => Err(recover_create(
                validated.name.first_name(),
                attempts,
                &last_error,
            )),
        }
    }

    /// Fetches one employee. Not retried.
    pub async fn get_employee(&self, id: EmployeeId) -> AppResult<EmployeeApiResponse> {
        info!(employee_id = %id, "fetching employee");

        let response = self
            .client
            .fetch_employee(id)
            .await
            .and_then(to_api_response)
            .map_err(|error| classify_read_failure(id, error, "fetching"))?;

        Ok(response)
    }

    /// Replaces one employee. Not retried.
    pub async fn update_employee(
        &self,
        id: EmployeeId,
        request: EmployeeApiRequest,
    ) -> AppResult<EmployeeApiResponse> {
        let validated = request.validate()?;
        info!(employee_id = %id, role = %validated.role, "updating employee");

        let response = self
            .client
            .update_employee(id, &validated.to_data_request())
            .await
            .and_then(to_api_response)
            .map_err(|error| match error {
                AppError::InvalidInput(_) | AppError::InvalidFields(_) => error,
                other => classify_read_failure(id, other, "updating"),
            })?;

        Ok(response)
    }

    /// Deletes one employee. Not retried.
    pub async fn delete_employee(&self, id: EmployeeId) -> AppResult<()> {
        info!(employee_id = %id, "deleting employee");

        self.client
            .delete_employee(id)
            .await
            .map_err(|error| classify_read_failure(id, error, "deleting"))?;

        info!(employee_id = %id, "employee deleted");
        Ok(())
    }
}

fn recover_create(first_name: &str, attempts: u32, last_error: &AppError) -> AppError {
    error!(
        first_name,
        attempts,
        error = %last_error,
        "all retries failed for creating employee"
    );
    AppError::Upstream(format!(
        "Failed to create employee after retries: {first_name}"
    ))
}

fn classify_read_failure(id: EmployeeId, error: AppError, action: &str) -> AppError {
    match error {
        AppError::NotFound(_) => {
            warn!(employee_id = %id, "employee not found upstream");
            AppError::NotFound(format!("Employee not found with ID: {id}"))
        }
        other => {
            error!(employee_id = %id, error = %other, "error while {action} employee");
            AppError::Upstream(format!("Unexpected error while {action} employee"))
        }
    }
}

#[cfg(test)]
mod tests;
