use crate::application::client::HttpClient;
use crate::application::services::{ClientsService, UserService};
use crate::constants::{CLIENTS_PATH, USER_PATH};
use crate::error::AppError;
use crate::model::requests::QueryParams;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Current user resource
pub struct User {
    client: Arc<HttpClient>,
}

impl User {
    /// Creates the resource on top of a shared client
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserService for User {
    async fn get(&self) -> Result<Value, AppError> {
        debug!("Getting current user");
        self.client.get(USER_PATH, QueryParams::new()).await
    }

    async fn update(&self) -> Result<Value, AppError> {
        Err(AppError::NotImplemented("user.update"))
    }
}

/// Agency clients resource
pub struct Clients {
    client: Arc<HttpClient>,
}

impl Clients {
    /// Creates the resource on top of a shared client
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClientsService for Clients {
    async fn list(&self) -> Result<Value, AppError> {
        debug!("Listing agency clients");
        self.client.get(CLIENTS_PATH, QueryParams::new()).await
    }

    async fn add(&self) -> Result<Value, AppError> {
        Err(AppError::NotImplemented("clients.add"))
    }
}
