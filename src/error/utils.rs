use crate::error::AppError;
use std::str::FromStr;

/// Common error handling utilities
pub struct ErrorUtils;

impl ErrorUtils {
    /// Create an upstream fetch error for a named query
    pub fn upstream_error(query: &str, message: impl Into<String>) -> AppError {
        AppError::UpstreamFetch {
            query: query.to_string(),
            message: message.into(),
        }
    }

    /// Create an upstream timeout error for a named query
    pub fn upstream_timeout(query: &str, timeout_secs: u64) -> AppError {
        AppError::UpstreamTimeout {
            query: query.to_string(),
            timeout_secs,
        }
    }

    /// Parse a numeric `_cat` column, which the cluster reports as a string
    pub fn parse_cat_number<T: FromStr>(value: &str, field_name: &str, query: &str) -> Result<T, AppError> {
        value.trim().parse::<T>().map_err(|_| {
            Self::upstream_error(
                query,
                format!("Invalid {} value '{}'", field_name, value),
            )
        })
    }
}
