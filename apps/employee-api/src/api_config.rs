use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use employee_application::RetryPolicy;
use employee_core::AppError;
use tracing_subscriber::EnvFilter;
use url::Url;

const DEFAULT_EMPLOYEE_DATA_URL: &str = "http://localhost:8081/api/employees";
const DEFAULT_EMPLOYEE_DATA_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub employee_data_url: Url,
    pub employee_data_timeout: Duration,
    pub retry_max_attempts: u32,
    pub retry_backoff_delay: Duration,
    pub api_host: String,
    pub api_port: u16,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let employee_data_url = lookup("EMPLOYEE_DATA_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EMPLOYEE_DATA_URL.to_owned());
        let employee_data_url = Url::parse(&employee_data_url).map_err(|error| {
            AppError::InvalidInput(format!(
                "invalid EMPLOYEE_DATA_URL '{employee_data_url}': {error}"
            ))
        })?;

        let retry_max_attempts = parsed_env(
            &lookup,
            "RETRY_MAX_ATTEMPTS",
            RetryPolicy::DEFAULT_MAX_ATTEMPTS,
        )?;
        if retry_max_attempts == 0 {
            return Err(AppError::InvalidInput(
                "RETRY_MAX_ATTEMPTS must be at least 1".to_owned(),
            ));
        }

        let default_delay_ms =
            u64::try_from(RetryPolicy::DEFAULT_DELAY.as_millis()).unwrap_or(u64::MAX);
        let retry_backoff_delay = Duration::from_millis(parsed_env(
            &lookup,
            "RETRY_BACKOFF_DELAY_MS",
            default_delay_ms,
        )?);
        let employee_data_timeout = Duration::from_millis(parsed_env(
            &lookup,
            "EMPLOYEE_DATA_TIMEOUT_MS",
            DEFAULT_EMPLOYEE_DATA_TIMEOUT_MS,
        )?);

        let api_host = lookup("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = lookup("API_PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);

        Ok(Self {
            employee_data_url,
            employee_data_timeout,
            retry_max_attempts,
            retry_backoff_delay,
            api_host,
            api_port,
        })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.retry_max_attempts, self.retry_backoff_delay)
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn parsed_env<F, T>(lookup: &F, name: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name).filter(|value| !value.trim().is_empty()) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|error| AppError::InvalidInput(format!("invalid {name} '{value}': {error}"))),
    }
}
