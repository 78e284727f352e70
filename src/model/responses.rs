/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// OAuth2 token issued by the token endpoint
///
/// The OAuth2 resource returns the raw JSON document; this model is a typed
/// view over it for callers that want to track expiry themselves.
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
pub struct TokenResponse {
    /// Access token sent as `Authorization: Bearer`
    pub access_token: String,
    /// Token type, `Bearer`
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Lifetime in seconds
    #[serde(default)]
    pub expires_in: i64,
    /// Token used to obtain a new access token
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// How many more tokens may be issued for this client
    #[serde(default)]
    pub tokens_left: Option<i64>,
    /// When this token was received, for expiry calculation
    #[serde(skip, default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

impl TokenResponse {
    /// Checks if the token is expired or will expire within `margin_seconds`
    ///
    /// Lifetimes or margins too large to represent saturate: an oversized
    /// positive `expires_in` never expires, an oversized negative one is
    /// always expired.
    #[must_use]
    pub fn is_expired(&self, margin_seconds: i64) -> bool {
        let Some(expire_at) = self.expire_at() else {
            return self.expires_in < 0;
        };
        match Duration::try_seconds(margin_seconds)
            .and_then(|margin| expire_at.checked_sub_signed(margin))
        {
            Some(deadline) => deadline <= Utc::now(),
            None => margin_seconds > 0,
        }
    }

    /// Moment the token stops being accepted
    ///
    /// `None` when `expires_in` falls outside the representable date range.
    #[must_use]
    pub fn expire_at(&self) -> Option<DateTime<Utc>> {
        Duration::try_seconds(self.expires_in)
            .and_then(|lifetime| self.created_at.checked_add_signed(lifetime))
    }
}

impl TryFrom<Value> for TokenResponse {
    type Error = AppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Ok(serde_json::from_value(value)?)
    }
}

impl TryFrom<&Value> for TokenResponse {
    type Error = AppError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::deserialize(value).map_err(AppError::from)
    }
}
