/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Session state shared by every request
//!
//! The session only stores the current bearer token. Obtaining and
//! refreshing tokens is up to the caller (see the OAuth2 resource); the
//! session never does it on its own.

use tokio::sync::RwLock;
use tracing::debug;

/// Holder of the bearer token attached to outgoing requests
#[derive(Debug, Default)]
pub struct Session {
    token: RwLock<Option<String>>,
}

impl Session {
    /// Creates an unauthenticated session
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the bearer token used by all subsequent requests
    ///
    /// Requests already in flight keep the token they were built with.
    pub async fn set_token(&self, token: impl Into<String>) {
        *self.token.write().await = Some(token.into());
        debug!("Session token updated");
    }

    /// Drops the bearer token; subsequent requests are sent unauthenticated
    pub async fn clear(&self) {
        *self.token.write().await = None;
        debug!("Session token cleared");
    }

    /// Current bearer token, if any
    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Whether a token is set
    pub async fn is_authenticated(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Value of the `Authorization` header, if a token is set
    pub async fn authorization(&self) -> Option<String> {
        self.token
            .read()
            .await
            .as_ref()
            .map(|token| format!("Bearer {token}"))
    }
}
