/// Session holding the bearer token
pub mod auth;
/// Shared HTTP transport
pub mod client;
/// Application configuration module
pub mod config;
/// Resource interfaces
pub mod interfaces;
/// Resource implementations
pub mod services;
