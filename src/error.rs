/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;

/// Errors returned by the myTarget client
#[derive(Debug)]
pub enum AppError {
    /// The API rejected the request parameters (HTTP 400)
    Validation(Value),
    /// The API rejected the credentials or token (HTTP 401)
    Auth(Value),
    /// Any other non-200 response
    Api {
        /// HTTP status returned by the API
        status: StatusCode,
        /// Parsed response body, or the raw text when it is not JSON
        body: Value,
    },
    /// The operation exists in the API surface but is not implemented
    NotImplemented(&'static str),
    /// Transport level failure
    Network(reqwest::Error),
    /// A response body could not be decoded
    Json(serde_json::Error),
    /// Arguments that cannot produce a valid request
    InvalidInput(String),
}

impl AppError {
    /// Classifies an error response by status code
    ///
    /// The body is parsed as JSON. When that fails the raw text is kept as a
    /// JSON string so the payload is never lost.
    pub fn from_response(status: StatusCode, text: &str) -> Self {
        let body = parse_body(text);
        match status {
            StatusCode::BAD_REQUEST => AppError::Validation(body),
            StatusCode::UNAUTHORIZED => AppError::Auth(body),
            _ => AppError::Api { status, body },
        }
    }

    /// HTTP status carried by the error, if it came from a response
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Validation(_) => Some(StatusCode::BAD_REQUEST),
            AppError::Auth(_) => Some(StatusCode::UNAUTHORIZED),
            AppError::Api { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Response body carried by the error, if it came from a response
    pub fn body(&self) -> Option<&Value> {
        match self {
            AppError::Validation(body) | AppError::Auth(body) => Some(body),
            AppError::Api { body, .. } => Some(body),
            _ => None,
        }
    }
}

fn parse_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(body) => write!(f, "validation error: {body}"),
            AppError::Auth(body) => write!(f, "auth error: {body}"),
            AppError::Api { status, body } => write!(f, "api error ({status}): {body}"),
            AppError::NotImplemented(operation) => write!(f, "not implemented: {operation}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}
