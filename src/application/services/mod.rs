/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Current user and agency clients
pub mod account_service;
/// Campaigns and banners
pub mod campaign_service;
/// OAuth2 token endpoint
pub mod oauth2_service;
/// Statistics and faststat
pub mod statistics_service;

pub use crate::application::interfaces::account::{ClientsService, UserService};
pub use crate::application::interfaces::campaign::{BannerService, CampaignService};
pub use crate::application::interfaces::oauth2::OAuth2Service;
pub use crate::application::interfaces::statistics::{FaststatService, StatisticsService};
pub use account_service::{Clients, User};
pub use campaign_service::{Banners, Campaigns};
pub use oauth2_service::OAuth2;
pub use statistics_service::{Faststat, Statistics};
