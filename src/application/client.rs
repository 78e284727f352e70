/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::auth::Session;
use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::http::{RequestBody, RequestOptions};
use crate::model::requests::QueryParams;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client as HttpInternalClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info};

/// Logs at INFO when the client runs in debug mode, at DEBUG otherwise
macro_rules! log_call {
    ($debug:expr, $($arg:tt)+) => {
        if $debug {
            info!($($arg)+);
        } else {
            debug!($($arg)+);
        }
    };
}

/// Shared transport for every myTarget resource
///
/// Holds the configuration, the bearer token and the underlying `reqwest`
/// client. Each call is one request: no retry, no token refresh.
pub struct HttpClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    session: Session,
}

impl HttpClient {
    /// Creates a new unauthenticated client
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Client ready to use
    /// * `Err(AppError)` - If the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http_client,
            config: Arc::new(config),
            session: Session::new(),
        })
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Root URL resource paths are appended to
    pub fn root_url(&self) -> &str {
        &self.config.base_url
    }

    /// Whether request/response logs are raised to INFO
    pub fn is_debug(&self) -> bool {
        self.config.debug
    }

    /// Session holding the bearer token
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Replaces the bearer token used by all subsequent calls
    ///
    /// Calls already in flight are not affected. Changing the token while
    /// other tasks issue requests is left to the caller to coordinate.
    pub async fn set_auth(&self, token: impl Into<String>) {
        self.session.set_token(token).await;
    }

    /// Removes the bearer token
    pub async fn clear_auth(&self) {
        self.session.clear().await;
    }

    /// Makes a GET request
    pub async fn get(&self, path: &str, query: QueryParams) -> Result<Value, AppError> {
        self.call(Method::GET, path, RequestOptions::new().with_query(query))
            .await
    }

    /// Makes a POST request
    pub async fn post(&self, path: &str, body: RequestBody) -> Result<Value, AppError> {
        let options = RequestOptions {
            body,
            ..RequestOptions::default()
        };
        self.call(Method::POST, path, options).await
    }

    /// Makes a request and returns the parsed JSON body
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Resource path, appended as is to the root URL
    /// * `options` - Query parameters and body
    ///
    /// # Returns
    /// * `Ok(Value)` - Parsed body of a 200 response
    /// * `Err(AppError)` - `Validation` on 400, `Auth` on 401, `Api` on any
    ///   other non-200 status, `Network`/`Json` on transport or decoding errors
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<Value, AppError> {
        self.call_as(method, path, options).await
    }

    /// Same as [`HttpClient::call`] but decodes the body into `T`
    pub async fn call_as<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, AppError> {
        let url = format!("{}{}", self.config.base_url, path);
        let debug_mode = self.config.debug;

        log_call!(
            debug_mode,
            "Request to {} {}: {}",
            method,
            url,
            json!({
                "params": options.query.pairs(),
                "body": options.body.to_log_value(),
            })
        );

        let mut request = self.http_client.request(method, &url);

        if !options.query.is_empty() {
            request = request.query(options.query.pairs());
        }

        if let Some(authorization) = self.session.authorization().await {
            request = request.header(AUTHORIZATION, authorization);
        }

        request = match &options.body {
            RequestBody::None => request,
            RequestBody::Form(fields) => request.form(fields),
            RequestBody::Json(value) => request.json(value),
        };

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        log_call!(debug_mode, "Received {}: {}", status.as_u16(), text);

        if status != StatusCode::OK {
            return Err(AppError::from_response(status, &text));
        }

        Ok(serde_json::from_str(&text)?)
    }
}
