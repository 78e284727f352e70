/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::model::requests::QueryParams;
use serde_json::Value;

/// Body of an outgoing request
///
/// The encoding is picked per call site: token requests are form encoded,
/// banner updates are JSON.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    /// No body
    #[default]
    None,
    /// `application/x-www-form-urlencoded` fields
    Form(Vec<(String, String)>),
    /// `application/json` document
    Json(Value),
}

impl RequestBody {
    /// JSON rendering used in request logs
    #[must_use]
    pub fn to_log_value(&self) -> Value {
        match self {
            RequestBody::None => Value::Null,
            RequestBody::Form(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::String(redact(k, v))))
                    .collect(),
            ),
            RequestBody::Json(value) => value.clone(),
        }
    }
}

/// Keeps client secrets and tokens out of the logs
fn redact(key: &str, value: &str) -> String {
    match key {
        "client_secret" | "refresh_token" => "***".to_string(),
        _ => value.to_string(),
    }
}

/// Query string and body of a call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Query parameters appended to the URL
    pub query: QueryParams,
    /// Request body
    pub body: RequestBody,
}

impl RequestOptions {
    /// Options with neither query nor body
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query parameters
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }
}
