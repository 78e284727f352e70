use crate::application::client::HttpClient;
use crate::application::services::OAuth2Service;
use crate::constants::{
    GRANT_AGENCY_CLIENT_CREDENTIALS, GRANT_CLIENT_CREDENTIALS, GRANT_REFRESH_TOKEN,
    OAUTH2_TOKEN_PATH,
};
use crate::error::AppError;
use crate::model::http::RequestBody;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// OAuth2 token endpoint
pub struct OAuth2 {
    client: Arc<HttpClient>,
}

impl OAuth2 {
    /// Creates the resource on top of a shared client
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Posts a form encoded token request
    ///
    /// The form always carries `grant_type`, `client_id` and
    /// `client_secret`, followed by `extra`.
    async fn obtain_token(
        &self,
        grant_type: &str,
        extra: &[(&str, &str)],
    ) -> Result<Value, AppError> {
        let credentials = &self.client.config().credentials;
        let mut form = vec![
            ("grant_type".to_string(), grant_type.to_string()),
            ("client_id".to_string(), credentials.client_id.clone()),
            ("client_secret".to_string(), credentials.client_secret.clone()),
        ];
        form.extend(extra.iter().map(|(k, v)| (k.to_string(), v.to_string())));

        info!("Requesting OAuth2 token with grant {}", grant_type);
        self.client
            .post(OAUTH2_TOKEN_PATH, RequestBody::Form(form))
            .await
    }
}

#[async_trait]
impl OAuth2Service for OAuth2 {
    async fn obtain_agency_token(&self) -> Result<Value, AppError> {
        self.obtain_token(GRANT_CLIENT_CREDENTIALS, &[]).await
    }

    async fn obtain_client_token(&self, client_name: &str) -> Result<Value, AppError> {
        self.obtain_token(
            GRANT_AGENCY_CLIENT_CREDENTIALS,
            &[("agency_client_name", client_name)],
        )
        .await
    }

    async fn refresh_token(&self, refresh_token: &str) -> Result<Value, AppError> {
        self.obtain_token(GRANT_REFRESH_TOKEN, &[("refresh_token", refresh_token)])
            .await
    }
}
