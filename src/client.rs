/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Entry point of the library
//!
//! [`MyTargetClient`] owns one shared [`HttpClient`] and exposes each API
//! resource as a public field, all of them pointing at that same client.
//!
//! # Example
//! ```ignore
//! use mytarget_client::prelude::*;
//!
//! let client = MyTargetClient::from_env()?;
//! client.set_auth("access-token").await;
//! let stats = client.faststat.banners(7.into()).await?;
//! ```

use crate::application::client::HttpClient;
use crate::application::config::Config;
use crate::application::services::{
    Banners, Campaigns, Clients, Faststat, OAuth2, Statistics, User,
};
use crate::error::AppError;
use std::sync::Arc;
use tracing::debug;

/// myTarget API client
pub struct MyTargetClient {
    http: Arc<HttpClient>,
    /// OAuth2 token endpoint
    pub oauth2: OAuth2,
    /// Current user
    pub user: User,
    /// Agency clients
    pub clients: Clients,
    /// Campaigns
    pub campaigns: Campaigns,
    /// Banners
    pub banners: Banners,
    /// Statistics
    pub statistics: Statistics,
    /// Near real-time statistics
    pub faststat: Faststat,
}

impl MyTargetClient {
    /// Creates a client from an explicit configuration
    ///
    /// No request is made; call [`MyTargetClient::set_auth`] with a token
    /// obtained through [`MyTargetClient::oauth2`] before using the other
    /// resources.
    pub fn new(config: Config) -> Result<Self, AppError> {
        debug!(
            "Creating myTarget client for {} (debug: {})",
            config.base_url, config.debug
        );
        let http = Arc::new(HttpClient::new(config)?);

        Ok(Self {
            oauth2: OAuth2::new(http.clone()),
            user: User::new(http.clone()),
            clients: Clients::new(http.clone()),
            campaigns: Campaigns::new(http.clone()),
            banners: Banners::new(http.clone()),
            statistics: Statistics::new(http.clone()),
            faststat: Faststat::new(http.clone()),
            http,
        })
    }

    /// Creates a client from `MYTARGET_*` environment variables
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new())
    }

    /// Sets the bearer token sent with every subsequent request
    pub async fn set_auth(&self, token: impl Into<String>) {
        self.http.set_auth(token).await;
    }

    /// Root URL of the API
    pub fn root_url(&self) -> &str {
        self.http.root_url()
    }

    /// Shared transport, for calls not covered by a resource
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}
