use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the OAuth2 token endpoint
///
/// Every operation returns the token document exactly as the server sent
/// it. See [`crate::model::responses::TokenResponse`] for a typed view.
#[async_trait]
pub trait OAuth2Service: Send + Sync {
    /// Obtains an agency token with the `client_credentials` grant
    async fn obtain_agency_token(&self) -> Result<Value, AppError>;

    /// Obtains a token on behalf of an agency client
    ///
    /// # Arguments
    /// * `client_name` - Name of the agency client, sent as `agency_client_name`
    async fn obtain_client_token(&self, client_name: &str) -> Result<Value, AppError>;

    /// Exchanges a refresh token for a new access token
    async fn refresh_token(&self, refresh_token: &str) -> Result<Value, AppError>;
}
