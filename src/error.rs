use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub mod utils;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// One of the upstream cluster queries failed or returned data we cannot use
    #[error("Upstream query '{query}' failed: {message}")]
    UpstreamFetch { query: String, message: String },

    #[error("Upstream query '{query}' timed out after {timeout_secs}s")]
    UpstreamTimeout { query: String, timeout_secs: u64 },

    /// A shard record carried a type marker other than `p` or `r`
    #[error("Unknown shard type '{marker}' for shard {shard} of index '{index}'")]
    InvalidShardType {
        index: String,
        shard: u32,
        marker: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl AppError {
    /// Machine-readable error kind placed in the response body
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::UpstreamFetch { .. } => "upstream_fetch",
            AppError::UpstreamTimeout { .. } => "upstream_timeout",
            AppError::InvalidShardType { .. } => "invalid_shard_type",
            AppError::ConfigError(_) => "config",
            AppError::InternalServerError(_) => "internal",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UpstreamFetch { .. } => StatusCode::BAD_GATEWAY,
            AppError::UpstreamTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            AppError::InvalidShardType { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = Json(json!({
            "error": self.kind(),
            "message": self.to_string(),
            "status": status.as_u16(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
