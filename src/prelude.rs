/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # myTarget Client Prelude
//!
//! Brings the client, its resources, their interfaces and the request
//! models into scope with a single import.
//!
//! ```rust
//! use mytarget_client::prelude::*;
//!
//! let config = Config::with_credentials("id", "secret", true, false);
//! assert_eq!(config.base_url, "https://target-sandbox.my.com/api");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the myTarget API client
pub use crate::application::config::{Config, Credentials, Environment};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND TRANSPORT
// ============================================================================

/// High level client
pub use crate::client::MyTargetClient;

/// Shared transport and session
pub use crate::application::auth::Session;
pub use crate::application::client::HttpClient;

// ============================================================================
// RESOURCES
// ============================================================================

/// Resource implementations and their interfaces
pub use crate::application::services::{
    BannerService, Banners, CampaignService, Campaigns, Clients, ClientsService, Faststat,
    FaststatService, OAuth2, OAuth2Service, Statistics, StatisticsService, User, UserService,
};

// ============================================================================
// MODELS
// ============================================================================

/// Request models
pub use crate::model::http::{RequestBody, RequestOptions};
pub use crate::model::requests::{
    BannerListParams, CampaignListParams, IdList, QueryParams, StatisticsRequest,
};

/// Response models
pub use crate::model::responses::TokenResponse;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use reqwest::Method;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
