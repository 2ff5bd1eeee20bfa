use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug)]
pub enum AppError {
    Request(reqwest::Error),
    Json(serde_json::Error),
    Io(std::io::Error),
    Parse(url::ParseError),
    Toml(toml::de::Error),
    Other(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Request(e) => tracing::error!("Request error: {:#}", e),
            AppError::Json(e) => tracing::error!("JSON error: {:#}", e),
            AppError::Io(e) => tracing::error!("IO error: {:#}", e),
            AppError::Parse(e) => tracing::error!("Parse error: {:#}", e),
            AppError::Toml(e) => tracing::error!("TOML error: {:#}", e),
            AppError::Other(e) => tracing::error!("Other error: {:#}", e),
        }

        (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong").into_response()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Request(e) => write!(f, "Request error: {}", e),
            AppError::Json(e) => write!(f, "JSON error: {}", e),
            AppError::Io(e) => write!(f, "IO error: {}", e),
            AppError::Parse(e) => write!(f, "Parse error: {}", e),
            AppError::Toml(e) => write!(f, "TOML error: {}", e),
            AppError::Other(e) => write!(f, "Other error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Request(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Parse(err)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Toml(err)
    }
}
