use async_trait::async_trait;
use employee_application::{EmployeeDataClient, EmployeeDataRequest, EmployeeDataResponse};
use employee_core::{AppError, AppResult};
use employee_domain::EmployeeId;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;
use url::Url;

/// reqwest-based client for the employee data service.
///
/// Does not retry; retry is owned by the calling use-case.
#[derive(Clone)]
pub struct HttpEmployeeDataClient {
    http_client: reqwest::Client,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    message: Option<String>,
}

impl HttpEmployeeDataClient {
    /// Creates a client rooted at the data service's employee collection URL.
    #[must_use]
    pub fn new(http_client: reqwest::Client, base_url: Url) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    fn collection_url(&self) -> String {
        self.base_url.as_str().trim_end_matches('/').to_owned()
    }

    fn item_url(&self, id: EmployeeId) -> String {
        format!("{}/{id}", self.collection_url())
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> AppResult<reqwest::Response> {
        let response = builder.send().await.map_err(|error| {
            AppError::Upstream(format!("employee data service request failed: {error}"))
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), "employee data service responded");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<UpstreamErrorBody>(&body)
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.trim().is_empty());

        Err(match status {
            StatusCode::NOT_FOUND => AppError::NotFound(
                message.unwrap_or_else(|| "employee data service returned 404".to_owned()),
            ),
            StatusCode::BAD_REQUEST => AppError::InvalidInput(
                message.unwrap_or_else(|| "employee data service rejected the request".to_owned()),
            ),
            _ => AppError::Upstream(format!(
                "employee data service responded with status {status}"
            )),
        })
    }

    async fn read_employee(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> AppResult<Option<EmployeeDataResponse>> {
        let response = self.send(builder).await?;
        let body = response.bytes().await.map_err(|error| {
            AppError::Upstream(format!(
                "failed to read employee data service response: {error}"
            ))
        })?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        serde_json::from_slice::<Option<EmployeeDataResponse>>(&body).map_err(|error| {
            AppError::Upstream(format!(
                "failed to decode employee data service response: {error}"
            ))
        })
    }
}

#[async_trait]
impl EmployeeDataClient for HttpEmployeeDataClient {
    async fn create_employee(
        &self,
        request: &EmployeeDataRequest,
    ) -> AppResult<Option<EmployeeDataResponse>> {
        self.read_employee(self.http_client.post(self.collection_url()).json(request))
            .await
    }

    async fn fetch_employee(&self, id: EmployeeId) -> AppResult<Option<EmployeeDataResponse>> {
        self.read_employee(self.http_client.get(self.item_url(id)))
            .await
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        request: &EmployeeDataRequest,
    ) -> AppResult<Option<EmployeeDataResponse>> {
        self.read_employee(self.http_client.put(self.item_url(id)).json(request))
            .await
    }

    async fn delete_employee(&self, id: EmployeeId) -> AppResult<()> {
        self.send(self.http_client.delete(self.item_url(id)))
            .await
            .map(|_| ())
    }
}
