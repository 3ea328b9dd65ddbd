use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;

use employee_core::{AppError, AppResult};
use employee_domain::{EmployeeId, EmployeeOperation, FullName, Role, RoleId};

use crate::employee_data_ports::{EmployeeDataClient, EmployeeDataRequest, EmployeeDataResponse};
use crate::employee_mapper::EmployeeApiRequest;
use crate::retry_policy::RetryPolicy;

use super::EmployeeGatewayService;

type Scripted = AppResult<Option<EmployeeDataResponse>>;

#[derive(Default)]
struct ScriptedDataClient {
    responses: Mutex<VecDeque<Scripted>>,
    create_requests: Mutex<Vec<EmployeeDataRequest>>,
    calls: Mutex<u32>,
}

impl ScriptedDataClient {
    fn with(responses: Vec<Scripted>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            ..Self::default()
        })
    }

    async fn next(&self) -> Scripted {
        *self.calls.lock().await += 1;
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Upstream("no scripted response".to_owned())))
    }

    async fn calls(&self) -> u32 {
        *self.calls.lock().await
    }
}

#[async_trait]
impl EmployeeDataClient for ScriptedDataClient {
    async fn create_employee(&self, request: &EmployeeDataRequest) -> Scripted {
        self.create_requests.lock().await.push(request.clone());
        self.next().await
    }

    async fn fetch_employee(&self, _id: EmployeeId) -> Scripted {
        self.next().await
    }

    async fn update_employee(&self, _id: EmployeeId, _request: &EmployeeDataRequest) -> Scripted {
        self.next().await
    }

    async fn delete_employee(&self, _id: EmployeeId) -> AppResult<()> {
        self.next().await.map(|_| ())
    }
}

const DELAY: Duration = Duration::from_millis(25);

fn service(client: Arc<ScriptedDataClient>) -> EmployeeGatewayService {
    EmployeeGatewayService::new(client, RetryPolicy::new(3, DELAY))
}

fn stored(id: i64, name: &str, role_id: i64) -> Scripted {
    Ok(Some(EmployeeDataResponse {
        id: Some(EmployeeId::new(id)),
        name: Some(name.to_owned()),
        role_id: Some(RoleId::new(role_id)),
    }))
}

fn transport_failure() -> Scripted {
    Err(AppError::Upstream(
        "error sending request: connection refused (os error 111)".to_owned(),
    ))
}

fn ada() -> EmployeeApiRequest {
    EmployeeApiRequest {
        first_name: Some("Ada".to_owned()),
        surname: Some("Lovelace".to_owned()),
        role: Some("admin".to_owned()),
    }
}

#[tokio::test]
async fn create_succeeds_after_two_failures() {
    let client = ScriptedDataClient::with(vec![
        transport_failure(),
        transport_failure(),
        stored(11, "Ada Lovelace", 1),
    ]);
    let started = Instant::now();

    let created = service(client.clone()).create_employee(ada()).await;

    assert!(started.elapsed() >= DELAY * 2);
    assert_eq!(client.calls().await, 3);
    let created = created.unwrap_or_else(|error| panic!("create failed: {error}"));
    assert_eq!(created.id, EmployeeId::new(11));
    assert_eq!(created.name, FullName::new("Ada", "Lovelace"));
    assert_eq!(created.role, Role::Admin);
}

#[tokio::test]
async fn create_sends_joined_name_and_role_id() {
    let client = ScriptedDataClient::with(vec![stored(1, "Ada Lovelace", 1)]);

    let created = service(client.clone()).create_employee(ada()).await;

    assert!(created.is_ok());
    assert_eq!(
        client.create_requests.lock().await.as_slice(),
        &[EmployeeDataRequest {
            name: "Ada Lovelace".to_owned(),
            role_id: RoleId::new(1),
        }]
    );
}

#[tokio::test]
async fn create_exhaustion_hides_raw_cause() {
    let client = ScriptedDataClient::with(vec![
        transport_failure(),
        transport_failure(),
        transport_failure(),
    ]);

    let error = service(client.clone()).create_employee(ada()).await.err();

    assert_eq!(client.calls().await, 3);
    assert_eq!(
        error,
        Some(AppError::Upstream(
            "Failed to create employee after retries: Ada".to_owned()
        ))
    );
    assert!(
        !error
            .map(|error| error.to_string().contains("connection refused"))
            .unwrap_or(true)
    );
}

#[tokio::test]
async fn invalid_responses_are_retried_like_transport_failures() {
    let client = ScriptedDataClient::with(vec![
        Ok(None),
        Ok(Some(EmployeeDataResponse {
            id: Some(EmployeeId::new(3)),
            name: None,
            role_id: Some(RoleId::new(1)),
        })),
        Ok(Some(EmployeeDataResponse::default())),
    ]);

    let error = service(client.clone()).create_employee(ada()).await.err();

    assert_eq!(client.calls().await, 3);
    assert!(matches!(
        error,
        Some(AppError::Upstream(message)) if message.ends_with(": Ada")
    ));
}

#[tokio::test]
async fn invalid_request_is_not_retried() {
    let client = ScriptedDataClient::with(vec![stored(1, "Ada Lovelace", 1)]);
    let request = EmployeeApiRequest {
        role: Some("janitor".to_owned()),
        ..ada()
    };

    let error = service(client.clone()).create_employee(request).await.err();

    assert_eq!(client.calls().await, 0);
    assert!(matches!(error, Some(AppError::InvalidFields(_))));
}

#[tokio::test]
async fn get_missing_employee_is_not_found() {
    let client = ScriptedDataClient::with(vec![Err(AppError::NotFound(
        "upstream 404".to_owned(),
    ))]);

    let error = service(client.clone())
        .get_employee(EmployeeId::new(404))
        .await
        .err();

    assert_eq!(client.calls().await, 1);
    assert_eq!(
        error,
        Some(AppError::NotFound(
            "Employee not found with ID: 404".to_owned()
        ))
    );
}

#[tokio::test]
async fn get_transport_failure_is_generic_upstream_and_not_retried() {
    let client = ScriptedDataClient::with(vec![transport_failure(), stored(1, "A B", 1)]);

    let error = service(client.clone())
        .get_employee(EmployeeId::new(1))
        .await
        .err();

    assert_eq!(client.calls().await, 1);
    assert_eq!(
        error,
        Some(AppError::Upstream(
            "Unexpected error while fetching employee".to_owned()
        ))
    );
}

#[tokio::test]
async fn get_maps_response_shape() {
    let client = ScriptedDataClient::with(vec![stored(5, "Linus", 2)]);

    let employee = service(client)
        .get_employee(EmployeeId::new(5))
        .await
        .unwrap_or_else(|error| panic!("get failed: {error}"));

    assert_eq!(employee.name, FullName::new("Linus", ""));
    assert_eq!(employee.role, Role::User);
}

#[tokio::test]
async fn update_passes_upstream_validation_errors_through() {
    let client = ScriptedDataClient::with(vec![Err(AppError::InvalidInput(
        "Role not found with ID: 2".to_owned(),
    ))]);
    let request = EmployeeApiRequest {
        role: Some("USER".to_owned()),
        ..ada()
    };

    let error = service(client)
        .update_employee(EmployeeId::new(1), request)
        .await
        .err();

    assert_eq!(
        error,
        Some(AppError::InvalidInput("Role not found with ID: 2".to_owned()))
    );
}

#[tokio::test]
async fn update_missing_employee_is_not_found() {
    let client = ScriptedDataClient::with(vec![Err(AppError::NotFound("gone".to_owned()))]);
    let request = EmployeeApiRequest {
        role: Some("USER".to_owned()),
        ..ada()
    };

    let error = service(client)
        .update_employee(EmployeeId::new(8), request)
        .await
        .err();

    assert_eq!(
        error,
        Some(AppError::NotFound("Employee not found with ID: 8".to_owned()))
    );
}

#[tokio::test]
async fn delete_failures_are_classified() {
    let client = ScriptedDataClient::with(vec![
        Err(AppError::NotFound("gone".to_owned())),
        Err(AppError::Upstream("500 Internal Server Error".to_owned())),
        Ok(None),
    ]);
    let gateway = service(client);

    assert!(matches!(
        gateway.delete_employee(EmployeeId::new(1)).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(
        gateway.delete_employee(EmployeeId::new(1)).await,
        Err(AppError::Upstream(
            "Unexpected error while deleting employee".to_owned()
        ))
    );
    assert!(gateway.delete_employee(EmployeeId::new(1)).await.is_ok());
}

#[test]
fn authority_is_enforced_per_operation() {
    let gateway = service(ScriptedDataClient::with(Vec::new()));

    assert!(
        gateway
            .require_authority(Role::Admin, EmployeeOperation::Create)
            .is_ok()
    );
    assert_eq!(
        gateway.require_authority(Role::Admin, EmployeeOperation::Update),
        Err(AppError::Forbidden("Access Denied".to_owned()))
    );
    assert!(
        gateway
            .require_authority(Role::Manager, EmployeeOperation::Read)
            .is_err()
    );
}
