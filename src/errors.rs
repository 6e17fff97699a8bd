// src/errors.rs
use thiserror::Error;

use crate::models::FailureKind;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to parse JSON response: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Application call failed with status {status}: {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
        request_id: Option<String>,
    },

    #[error("Unexpected response structure: {0}")]
    UnexpectedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ProbeError {
    /// Which side of the call the failure came from.
    pub fn kind(&self) -> FailureKind {
        match self {
            ProbeError::Api { .. } => FailureKind::Remote,
            ProbeError::Config(_) | ProbeError::FileRead(_) | ProbeError::TomlParse(_) => {
                FailureKind::Config
            }
            ProbeError::Request(_)
            | ProbeError::JsonParse(_)
            | ProbeError::UnexpectedResponse(_) => FailureKind::Transport,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let api = ProbeError::Api {
            status: 401,
            code: Some("InvalidApiKey".to_string()),
            message: "Invalid API-key provided.".to_string(),
            request_id: None,
        };
        assert_eq!(api.kind(), FailureKind::Remote);
        assert_eq!(
            ProbeError::Config("missing".to_string()).kind(),
            FailureKind::Config
        );
        assert_eq!(
            ProbeError::UnexpectedResponse("{}".to_string()).kind(),
            FailureKind::Transport
        );
    }

    #[test]
    fn test_api_error_display() {
        let err = ProbeError::Api {
            status: 400,
            code: None,
            message: "invalid api_key".to_string(),
            request_id: Some("req-1".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Application call failed with status 400: invalid api_key"
        );
    }
}
