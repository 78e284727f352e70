use crate::application::client::HttpClient;
use crate::application::services::{BannerService, CampaignService};
use crate::error::AppError;
use crate::model::http::RequestBody;
use crate::model::requests::{BannerListParams, CampaignListParams, IdList, banner_update_path};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Campaigns resource
pub struct Campaigns {
    client: Arc<HttpClient>,
}

impl Campaigns {
    /// Creates the resource on top of a shared client
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CampaignService for Campaigns {
    async fn list(&self, params: &CampaignListParams) -> Result<Value, AppError> {
        let path = params.path();
        debug!("Listing campaigns: {}", path);
        self.client.get(&path, params.query()).await
    }
}

/// Banners resource
pub struct Banners {
    client: Arc<HttpClient>,
}

impl Banners {
    /// Creates the resource on top of a shared client
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BannerService for Banners {
    async fn list(&self, params: &BannerListParams) -> Result<Value, AppError> {
        let path = params.path();
        debug!("Listing banners: {}", path);
        self.client.get(&path, params.query()).await
    }

    async fn update(&self, ids: IdList, params: &Value) -> Result<Value, AppError> {
        let path = banner_update_path(&ids)?;
        info!("Updating banners {}", ids.join());
        self.client
            .post(&path, RequestBody::Json(params.clone()))
            .await
    }
}
