use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum AppError {
    /// Driver failure (connectivity, server error, bad write)
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Path segment is not a valid ObjectId
    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl AppError {
    /// Message exposed to clients; driver details stay in the logs
    pub fn public_message(&self) -> String {
        match self {
            AppError::Database(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            AppError::InvalidId(id) => format!("Invalid id: {}", id),
            AppError::InvalidRequest(msg) | AppError::Config(msg) => msg.clone(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidId(_) | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("❌ {}", self);
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            error: self.public_message(),
        })
    }
}
