use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the current user resource
#[async_trait]
pub trait UserService: Send + Sync {
    /// Gets information about the authenticated user
    async fn get(&self) -> Result<Value, AppError>;

    /// Updates the authenticated user
    ///
    /// Not available in this client; always returns `AppError::NotImplemented`.
    async fn update(&self) -> Result<Value, AppError>;
}

/// Interface for the agency clients resource
#[async_trait]
pub trait ClientsService: Send + Sync {
    /// Lists the agency's clients
    async fn list(&self) -> Result<Value, AppError>;

    /// Adds an agency client
    ///
    /// Not available in this client; always returns `AppError::NotImplemented`.
    async fn add(&self) -> Result<Value, AppError>;
}
