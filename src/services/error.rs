use thiserror::Error;

/// Failure of a backend or provider call. Callers only log it or show a generic alert.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    #[error("Parse error: {0}")]
    Decode(String),
    #[error("Request build error: {0}")]
    Request(String),
    #[error("Provider error: {0}")]
    Provider(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Http { status: 404, .. })
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}
