/// User and agency clients interfaces
pub mod account;
/// Campaign and banner interfaces
pub mod campaign;
/// OAuth2 token interface
pub mod oauth2;
/// Statistics and faststat interfaces
pub mod statistics;
