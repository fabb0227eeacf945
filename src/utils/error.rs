use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Customer {id} not found")]
    CustomerNotFound { id: i64 },

    #[error("No order found for customer {customer_id}")]
    OrderNotFound { customer_id: i64 },

    #[error("Upstream request failed: {0}")]
    UpstreamError(#[from] reqwest::Error),

    #[error("Upstream service '{service}' responded with status {status}")]
    UpstreamStatusError { service: String, status: u16 },

    #[error("No instances registered for service '{service}'")]
    ServiceUnresolvedError { service: String },

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ServiceError>;

impl ServiceError {
    /// 上游相關錯誤 (呼叫端只會看到「沒有訂單」)
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            ServiceError::UpstreamError(_)
                | ServiceError::UpstreamStatusError { .. }
                | ServiceError::ServiceUnresolvedError { .. }
                | ServiceError::SerializationError(_)
                | ServiceError::UrlError(_)
        )
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::CustomerNotFound { .. } | ServiceError::OrderNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ServiceError::ConfigError { message } => {
                format!("Configuration problem: {}", message)
            }
            ServiceError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            ServiceError::IoError(e) => format!("System I/O failure: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ServiceError::ConfigError { .. } => {
                "Check that the configuration file exists and is valid TOML"
            }
            ServiceError::InvalidConfigValueError { .. } => {
                "Fix the reported setting on the command line or in the config file"
            }
            ServiceError::IoError(_) => "Check that the listening port is free",
            ServiceError::ServiceUnresolvedError { .. } => {
                "Register at least one instance with --order-service-url or [registry]"
            }
            _ => "Re-run with --verbose for details",
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("❌ Request failed: {}", self);
        }
        // 404 與 500 都回傳空 body
        status.into_response()
    }
}
