//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod http_employee_data_client;
mod in_memory_employee_store;
mod postgres_employee_repository;
mod postgres_role_repository;

pub use http_employee_data_client::HttpEmployeeDataClient;
pub use in_memory_employee_store::InMemoryEmployeeStore;
pub use postgres_employee_repository::PostgresEmployeeRepository;
pub use postgres_role_repository::PostgresRoleRepository;
