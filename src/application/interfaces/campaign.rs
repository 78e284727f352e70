use crate::error::AppError;
use crate::model::requests::{BannerListParams, CampaignListParams, IdList};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the campaigns resource
#[async_trait]
pub trait CampaignService: Send + Sync {
    /// Lists campaigns matching the filters
    ///
    /// # Arguments
    /// * `params` - Optional ids, status, fields and the `with_banners` flag
    async fn list(&self, params: &CampaignListParams) -> Result<Value, AppError>;
}

/// Interface for the banners resource
#[async_trait]
pub trait BannerService: Send + Sync {
    /// Lists banners matching the filters
    async fn list(&self, params: &BannerListParams) -> Result<Value, AppError>;

    /// Updates one or more banners
    ///
    /// # Arguments
    /// * `ids` - Banners to update; at least one is required
    /// * `params` - JSON document sent as the request body
    async fn update(&self, ids: IdList, params: &Value) -> Result<Value, AppError>;
}
