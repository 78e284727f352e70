/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # myTarget Client
//!
//! A thin async client for the myTarget advertising REST API.
//!
//! The client builds resource paths, serializes filters into query
//! parameters, attaches the OAuth2 bearer token and maps error statuses to
//! [`error::AppError`]. Every operation is a single request/response round
//! trip: there is no retry, caching, pagination or rate limiting.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mytarget_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let config = Config::with_credentials("client-id", "client-secret", true, false);
//! let client = MyTargetClient::new(config)?;
//!
//! let token = client.oauth2.obtain_agency_token().await?;
//! if let Some(access_token) = token["access_token"].as_str() {
//!     client.set_auth(access_token).await;
//! }
//!
//! let campaigns = client
//!     .campaigns
//!     .list(&CampaignListParams::new().with_ids(vec![1, 2, 3]))
//!     .await?;
//! println!("{campaigns}");
//! # Ok(())
//! # }
//! ```

/// Application layer: configuration, session, transport and resources
pub mod application;
/// High level client exposing every resource namespace
pub mod client;
/// Global constants
pub mod constants;
/// Error type for the library
pub mod error;
/// Request and response models
pub mod model;
/// Commonly used types and traits
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Re-export of the configuration module under a shorter path
pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
