use crate::utils::AppError;
use std::env;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DB_NAME: &str = "MovieMasterDB";

/// Runtime configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub uri: String,
    pub host: String,
    pub port: u16,
    pub db_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup (process env in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let uri = lookup("URI")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| AppError::Config("URI must be set".to_string()))?;

        let port = match lookup("PORT").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::Config(format!("PORT is not a valid port: {}", raw)))?,
            None => DEFAULT_PORT,
        };

        let host = lookup("HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let db_name = lookup("DB_NAME")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_NAME.to_string());

        Ok(Self { uri, host, port, db_name })
    }

    /// Connection string with credentials stripped, safe for logs
    pub fn redacted_uri(&self) -> String {
        match (self.uri.find("://"), self.uri.rfind('@')) {
            (Some(scheme_end), Some(at)) if at > scheme_end => {
                format!("{}://***@{}", &self.uri[..scheme_end], &self.uri[at + 1..])
            }
            _ => self.uri.clone(),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
