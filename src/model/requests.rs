/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{FIELDS_SEPARATOR, ID_SEPARATOR};
use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// One or more object identifiers embedded in a resource path
///
/// A single id and a list of ids are both accepted; they are rendered as a
/// `;`-joined segment (`1;2;3`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdList(Vec<String>);

impl IdList {
    /// Builds a list from anything that yields printable ids
    pub fn new<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        Self(ids.into_iter().map(|id| id.to_string()).collect())
    }

    /// Whether the list holds no ids
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of ids
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Path segment form: `1;2;3`
    #[must_use]
    pub fn join(&self) -> String {
        self.0.join(ID_SEPARATOR)
    }

    /// Like [`IdList::join`] but rejects an empty list
    ///
    /// Used where the id segment is mandatory in the path.
    pub fn require(&self, what: &str) -> Result<String, AppError> {
        if self.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "{what} requires at least one id"
            )));
        }
        Ok(self.join())
    }
}

macro_rules! impl_id_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for IdList {
                fn from(id: $t) -> Self {
                    Self(vec![id.to_string()])
                }
            }
        )*
    };
}

impl_id_from!(u32, u64, i32, i64, usize, &str, String);

impl<T: ToString> From<Vec<T>> for IdList {
    fn from(ids: Vec<T>) -> Self {
        Self::new(ids)
    }
}

impl<T: ToString> From<&[T]> for IdList {
    fn from(ids: &[T]) -> Self {
        Self(ids.iter().map(|id| id.to_string()).collect())
    }
}

impl<T: ToString, const N: usize> From<[T; N]> for IdList {
    fn from(ids: [T; N]) -> Self {
        Self::new(ids)
    }
}

/// Optional `/1;2;3` segment; empty when no ids were given
fn optional_id_segment(ids: Option<&IdList>) -> String {
    match ids {
        Some(ids) if !ids.is_empty() => format!("/{}", ids.join()),
        _ => String::new(),
    }
}

/// Ordered query parameters
///
/// Empty values are never stored: a filter that is absent or empty is left
/// out of the query string instead of being sent blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Creates an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key=value` unless the value is empty
    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.0.push((key.to_string(), value));
        }
    }

    /// Appends `key=value` when a value is present
    pub fn push_opt(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Appends a `,`-joined list unless it is empty
    pub fn push_list(&mut self, key: &str, values: &[String]) {
        self.push(key, values.join(FIELDS_SEPARATOR));
    }

    /// Value stored for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether no parameter is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Parameters as `(key, value)` pairs
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (key, value) in iter {
            let key: String = key.into();
            params.push(&key, value);
        }
        params
    }
}

/// Filters for listing campaigns
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampaignListParams {
    /// Restrict to these campaign ids
    pub ids: Option<IdList>,
    /// Campaign status filter (`active`, `blocked`, `deleted`)
    pub status: Option<String>,
    /// Fields to return
    pub fields: Vec<String>,
    /// Embed each campaign's banners
    pub with_banners: bool,
}

impl CampaignListParams {
    /// Creates a filter set that lists every campaign
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one id or a list of ids
    pub fn with_ids(mut self, ids: impl Into<IdList>) -> Self {
        self.ids = Some(ids.into());
        self
    }

    /// Set the status filter
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the returned fields
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single returned field
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Embed banners in the response
    pub fn with_banners(mut self, with_banners: bool) -> Self {
        self.with_banners = with_banners;
        self
    }

    /// `/v1/campaigns[/ids].json`
    #[must_use]
    pub fn path(&self) -> String {
        format!("/v1/campaigns{}.json", optional_id_segment(self.ids.as_ref()))
    }

    /// Query string for the filters that are set
    #[must_use]
    pub fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("status", self.status.as_deref());
        params.push_list("fields", &self.fields);
        if self.with_banners {
            params.push("with_banners", "1");
        }
        params
    }
}

/// Filters for listing banners
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BannerListParams {
    /// Restrict to these banner ids
    pub ids: Option<IdList>,
    /// Banner status filter
    pub status: Option<String>,
    /// Status filter on the parent campaign
    pub campaign_status: Option<String>,
    /// Fields to return
    pub fields: Vec<String>,
    /// Only banners updated at or after this moment
    pub updated_gte: Option<String>,
    /// Only banners whose statistics were updated at or after this moment
    pub last_stats_updated_gte: Option<String>,
}

impl BannerListParams {
    /// Creates a filter set that lists every banner
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one id or a list of ids
    pub fn with_ids(mut self, ids: impl Into<IdList>) -> Self {
        self.ids = Some(ids.into());
        self
    }

    /// Set the status filter
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the campaign status filter
    pub fn with_campaign_status(mut self, campaign_status: impl Into<String>) -> Self {
        self.campaign_status = Some(campaign_status.into());
        self
    }

    /// Set the returned fields
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single returned field
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Set the `updated__gte` filter
    pub fn with_updated_gte(mut self, updated_gte: impl Into<String>) -> Self {
        self.updated_gte = Some(updated_gte.into());
        self
    }

    /// Set the `last_stats_updated__gte` filter
    pub fn with_last_stats_updated_gte(mut self, last_stats_updated_gte: impl Into<String>) -> Self {
        self.last_stats_updated_gte = Some(last_stats_updated_gte.into());
        self
    }

    /// `/v1/banners[/ids].json`
    #[must_use]
    pub fn path(&self) -> String {
        format!("/v1/banners{}.json", optional_id_segment(self.ids.as_ref()))
    }

    /// Query string for the filters that are set
    #[must_use]
    pub fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("status", self.status.as_deref());
        params.push_opt("campaign__status", self.campaign_status.as_deref());
        params.push_list("fields", &self.fields);
        params.push_opt("updated__gte", self.updated_gte.as_deref());
        params.push_opt(
            "last_stats_updated__gte",
            self.last_stats_updated_gte.as_deref(),
        );
        params
    }
}

/// `/v1/banners/{ids}.json`, the id segment being mandatory
pub fn banner_update_path(ids: &IdList) -> Result<String, AppError> {
    Ok(format!("/v1/banners/{}.json", ids.require("banner update")?))
}

/// Parameters of a statistics request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatisticsRequest {
    /// `campaigns`, `banners` or `users`
    pub object_type: String,
    /// Objects to report on
    pub object_id: IdList,
    /// Report granularity, e.g. `day` or `summary`
    pub stat_type: String,
    /// First day of the range
    pub date_from: Option<String>,
    /// Last day of the range
    pub date_to: Option<String>,
}

impl StatisticsRequest {
    /// Creates a request without a date range
    pub fn new(
        object_type: impl Into<String>,
        object_id: impl Into<IdList>,
        stat_type: impl Into<String>,
    ) -> Self {
        Self {
            object_type: object_type.into(),
            object_id: object_id.into(),
            stat_type: stat_type.into(),
            date_from: None,
            date_to: None,
        }
    }

    /// Set both ends of the date range
    pub fn with_dates(mut self, date_from: impl Into<String>, date_to: impl Into<String>) -> Self {
        self.date_from = Some(date_from.into());
        self.date_to = Some(date_to.into());
        self
    }

    /// Set the first day of the range
    pub fn with_date_from(mut self, date_from: impl Into<String>) -> Self {
        self.date_from = Some(date_from.into());
        self
    }

    /// Set the last day of the range
    pub fn with_date_to(mut self, date_to: impl Into<String>) -> Self {
        self.date_to = Some(date_to.into());
        self
    }

    /// `/v1/statistics/{type}/{ids}/{stat}[/{from}-{to}].json`
    ///
    /// The range segment is only added when `date_from` is set, and then
    /// `date_to` must be set too. A lone `date_to` is ignored.
    pub fn path(&self) -> Result<String, AppError> {
        let ids = self.object_id.require("statistics")?;
        let dates = match non_empty(&self.date_from) {
            Some(from) => match non_empty(&self.date_to) {
                Some(to) => format!("/{from}-{to}"),
                None => {
                    return Err(AppError::InvalidInput(
                        "date_to is required when date_from is set".to_string(),
                    ));
                }
            },
            None => String::new(),
        };
        Ok(format!(
            "/v1/statistics/{}/{}/{}{}.json",
            self.object_type, ids, self.stat_type, dates
        ))
    }
}

/// `/v1/statistics/faststat/{type}/{ids}.json`
pub fn faststat_path(object_type: &str, object_id: &IdList) -> Result<String, AppError> {
    Ok(format!(
        "/v1/statistics/faststat/{}/{}.json",
        object_type,
        object_id.require("faststat")?
    ))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
