use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use employee_core::AppError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct DataConfig {
    pub migrate_only: bool,
    pub database_url: String,
    pub database_max_connections: u32,
    pub data_host: String,
    pub data_port: u16,
}

impl DataConfig {
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");

        let database_url = required_env("DATABASE_URL")?;
        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .filter(|value| *value > 0)
            .unwrap_or(10);

        let data_host = env::var("DATA_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let data_port = env::var("DATA_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8081);

        Ok(Self {
            migrate_only,
            database_url,
            database_max_connections,
            data_host,
            data_port,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.data_host).map_err(|error| {
            AppError::Internal(format!("invalid DATA_HOST '{}': {error}", self.data_host))
        })?;
        Ok(SocketAddr::from((host, self.data_port)))
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

fn required_env(name: &str) -> Result<String, AppError> {
    let value = env::var(name)
        .map_err(|_| AppError::InvalidInput(format!("{name} is required")))?;
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{name} must not be empty")));
    }

    Ok(value)
}
