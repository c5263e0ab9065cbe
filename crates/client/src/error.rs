use serde::Deserialize;
use telconf_core::error::CoreError;

/// Errors from the admin REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend rejected the bearer token (HTTP 401).
    #[error("Unauthorized")]
    Unauthorized,

    /// Any other non-2xx status.
    #[error("API error ({status}): {}", message.as_deref().unwrap_or("<no message>"))]
    Status {
        status: u16,
        /// The `msg` field of the error body, when the backend sent one.
        message: Option<String>,
    },
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Message the backend attached to the failure, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Build a status error from a raw response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        #[derive(Deserialize)]
        struct ErrorBody {
            msg: Option<String>,
        }
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.msg)
            .filter(|m| !m.is_empty());
        Self::Status { status, message }
    }
}

/// Failures that end a form session. Recoverable outcomes (validation
/// failures, redirects, service errors) are reported as values instead.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("form has not been hydrated")]
    NotMounted,

    #[error(transparent)]
    Core(#[from] CoreError),
}
