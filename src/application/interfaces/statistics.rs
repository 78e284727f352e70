use crate::error::AppError;
use crate::model::requests::{IdList, StatisticsRequest};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the statistics resource
#[async_trait]
pub trait StatisticsService: Send + Sync {
    /// Gets statistics for any object type
    ///
    /// # Returns
    /// * `Err(AppError::InvalidInput)` when `date_from` is set without `date_to`
    ///   or no object id is given
    async fn get(&self, request: &StatisticsRequest) -> Result<Value, AppError>;

    /// Gets campaign statistics
    async fn campaigns(
        &self,
        object_id: IdList,
        stat_type: &str,
        date_from: Option<&str>,
        date_to: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Gets banner statistics
    async fn banners(
        &self,
        object_id: IdList,
        stat_type: &str,
        date_from: Option<&str>,
        date_to: Option<&str>,
    ) -> Result<Value, AppError>;
}

/// Interface for the near real-time statistics resource
#[async_trait]
pub trait FaststatService: Send + Sync {
    /// Gets fast statistics for any object type
    async fn get(&self, object_type: &str, object_id: IdList) -> Result<Value, AppError>;

    /// Gets fast statistics for campaigns
    async fn campaigns(&self, ids: IdList) -> Result<Value, AppError>;

    /// Gets fast statistics for banners
    async fn banners(&self, ids: IdList) -> Result<Value, AppError>;

    /// Gets fast statistics for users
    async fn users(&self, ids: IdList) -> Result<Value, AppError>;
}
