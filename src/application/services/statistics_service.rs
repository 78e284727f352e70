use crate::application::client::HttpClient;
use crate::application::services::{FaststatService, StatisticsService};
use crate::error::AppError;
use crate::model::requests::{IdList, QueryParams, StatisticsRequest, faststat_path};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Statistics resource
pub struct Statistics {
    client: Arc<HttpClient>,
}

impl Statistics {
    /// Creates the resource on top of a shared client
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    async fn get_for(
        &self,
        object_type: &str,
        object_id: IdList,
        stat_type: &str,
        date_from: Option<&str>,
        date_to: Option<&str>,
    ) -> Result<Value, AppError> {
        let request = StatisticsRequest {
            object_type: object_type.to_string(),
            object_id,
            stat_type: stat_type.to_string(),
            date_from: date_from.map(str::to_string),
            date_to: date_to.map(str::to_string),
        };
        self.get(&request).await
    }
}

#[async_trait]
impl StatisticsService for Statistics {
    async fn get(&self, request: &StatisticsRequest) -> Result<Value, AppError> {
        let path = request.path()?;
        debug!("Getting statistics: {}", path);
        self.client.get(&path, QueryParams::new()).await
    }

    async fn campaigns(
        &self,
        object_id: IdList,
        stat_type: &str,
        date_from: Option<&str>,
        date_to: Option<&str>,
    ) -> Result<Value, AppError> {
        self.get_for("campaigns", object_id, stat_type, date_from, date_to)
            .await
    }

    async fn banners(
        &self,
        object_id: IdList,
        stat_type: &str,
        date_from: Option<&str>,
        date_to: Option<&str>,
    ) -> Result<Value, AppError> {
        self.get_for("banners", object_id, stat_type, date_from, date_to)
            .await
    }
}

/// Near real-time statistics resource
pub struct Faststat {
    client: Arc<HttpClient>,
}

impl Faststat {
    /// Creates the resource on top of a shared client
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FaststatService for Faststat {
    async fn get(&self, object_type: &str, object_id: IdList) -> Result<Value, AppError> {
        let path = faststat_path(object_type, &object_id)?;
        debug!("Getting faststat: {}", path);
        self.client.get(&path, QueryParams::new()).await
    }

    async fn campaigns(&self, ids: IdList) -> Result<Value, AppError> {
        self.get("campaigns", ids).await
    }

    async fn banners(&self, ids: IdList) -> Result<Value, AppError> {
        self.get("banners", ids).await
    }

    async fn users(&self, ids: IdList) -> Result<Value, AppError> {
        self.get("users", ids).await
    }
}
