use crate::constants::{PRODUCTION_HOST, SANDBOX_HOST};
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// OAuth2 client credentials issued by myTarget
pub struct Credentials {
    /// OAuth2 client identifier
    pub client_id: String,
    /// OAuth2 client secret, never serialized
    #[serde(skip_serializing, default)]
    pub client_secret: String,
}

/// API host selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// `target-sandbox.my.com`
    #[default]
    Sandbox,
    /// `target.my.com`
    Production,
}

impl Environment {
    /// Picks the environment from a sandbox flag
    #[must_use]
    pub fn from_sandbox(is_sandbox: bool) -> Self {
        if is_sandbox {
            Environment::Sandbox
        } else {
            Environment::Production
        }
    }

    /// Host name of the environment
    #[must_use]
    pub fn host(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_HOST,
            Environment::Production => PRODUCTION_HOST,
        }
    }

    /// Root URL every resource path is appended to
    #[must_use]
    pub fn root_url(&self) -> String {
        format!("https://{}/api", self.host())
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the myTarget API client
pub struct Config {
    /// OAuth2 client credentials
    pub credentials: Credentials,
    /// Sandbox or production host
    pub environment: Environment,
    /// When set, request/response logs are emitted at INFO instead of DEBUG
    pub debug: bool,
    /// Root URL of the API, derived from `environment` unless overridden
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Reads `MYTARGET_CLIENT_ID`, `MYTARGET_CLIENT_SECRET`,
    /// `MYTARGET_SANDBOX` (default `true`), `MYTARGET_DEBUG` (default `false`)
    /// and the optional `MYTARGET_BASE_URL`, after loading a `.env` file when
    /// one is present.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let client_id = get_env_or_default("MYTARGET_CLIENT_ID", String::from("default_client_id"));
        let client_secret = get_env_or_default(
            "MYTARGET_CLIENT_SECRET",
            String::from("default_client_secret"),
        );

        if client_id == "default_client_id" {
            error!("MYTARGET_CLIENT_ID not found in environment variables or .env file");
        }
        if client_secret == "default_client_secret" {
            error!("MYTARGET_CLIENT_SECRET not found in environment variables or .env file");
        }

        let mut config = Self::with_credentials(
            client_id,
            client_secret,
            get_env_flag("MYTARGET_SANDBOX", true),
            get_env_flag("MYTARGET_DEBUG", false),
        );
        if let Some(base_url) = get_env_or_none::<String>("MYTARGET_BASE_URL") {
            config = config.with_base_url(base_url);
        }
        config
    }

    /// Creates a configuration from explicit values
    ///
    /// # Arguments
    /// * `client_id` - OAuth2 client identifier
    /// * `client_secret` - OAuth2 client secret
    /// * `is_sandbox` - `true` for the sandbox host, `false` for production
    /// * `debug` - raise request/response logging from DEBUG to INFO
    pub fn with_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        is_sandbox: bool,
        debug: bool,
    ) -> Self {
        let environment = Environment::from_sandbox(is_sandbox);
        Self {
            credentials: Credentials {
                client_id: client_id.into(),
                client_secret: client_secret.into(),
            },
            environment,
            debug,
            base_url: environment.root_url(),
        }
    }

    /// Overrides the root URL, e.g. to go through a proxy
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Whether the sandbox host is selected
    #[must_use]
    pub fn is_sandbox(&self) -> bool {
        self.environment == Environment::Sandbox
    }
}
