//! Error handling for the API module

use crate::consts::cli_consts::GENERIC_ERROR_MESSAGE;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to encode a request body or decode a response body.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// A selected image could not be read from disk.
    #[error("Failed to read image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = match response.text().await {
            Ok(body) => Self::extract_message(&body),
            Err(_) => GENERIC_ERROR_MESSAGE.to_string(),
        };

        ApiError::Http { status, message }
    }

    /// Pulls the human readable message out of an error body.
    ///
    /// Looks at `detail` first (plain string, or the first `msg` of a
    /// validation error list), then `message`.
    pub fn extract_message(body: &str) -> String {
        let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
            return GENERIC_ERROR_MESSAGE.to_string();
        };

        let detail = match value.get("detail") {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Array(items)) => items
                .first()
                .and_then(|item| item.get("msg"))
                .and_then(|msg| msg.as_str())
                .map(str::to_string),
            _ => None,
        };

        detail
            .or_else(|| {
                value
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for 401 responses, i.e. a missing, invalid or expired token.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Message suitable for a banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { message, .. } => message.clone(),
            ApiError::Reqwest(e) if e.is_timeout() => "Request timed out".to_string(),
            ApiError::Reqwest(e) if e.is_connect() => {
                "Could not connect to the server".to_string()
            }
            ApiError::Reqwest(_) => "Network error".to_string(),
            ApiError::Json(_) => "Unexpected response from the server".to_string(),
            ApiError::Image { .. } => self.to_string(),
        }
    }
}
