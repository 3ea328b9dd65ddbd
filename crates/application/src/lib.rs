//! Application services and ports.

#![forbid(unsafe_code)]

mod employee_data_ports;
mod employee_gateway_service;
mod employee_mapper;
mod employee_ports;
mod employee_service;
mod retry_policy;
mod role_service;

pub use employee_data_ports::{EmployeeDataClient, EmployeeDataRequest, EmployeeDataResponse};
pub use employee_gateway_service::{ACCESS_DENIED_MESSAGE, EmployeeGatewayService};
pub use employee_mapper::{
    EmployeeApiRequest, EmployeeApiResponse, ValidatedEmployeeRequest, to_api_response,
};
pub use employee_ports::{
    EmployeeRecordInput, EmployeeRepository, RoleCascadeOutcome, RoleRepository,
    SaveEmployeeInput,
};
pub use employee_service::EmployeeService;
pub use retry_policy::{RetryClassifier, RetryFailure, RetryPolicy, retry_all};
pub use role_service::RoleService;
