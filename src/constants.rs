/// Production API host
pub const PRODUCTION_HOST: &str = "target.my.com";
/// Sandbox API host
pub const SANDBOX_HOST: &str = "target-sandbox.my.com";
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("mytarget-client/", env!("CARGO_PKG_VERSION"));
/// OAuth2 token endpoint
pub const OAUTH2_TOKEN_PATH: &str = "/v2/oauth2/token.json";
/// Current user endpoint
pub const USER_PATH: &str = "/v1/user.json";
/// Agency clients endpoint
pub const CLIENTS_PATH: &str = "/v1/clients.json";
/// Separator used to join identifiers inside a path segment
pub const ID_SEPARATOR: &str = ";";
/// Separator used to join the `fields` query parameter
pub const FIELDS_SEPARATOR: &str = ",";
/// Grant type used to obtain an agency token
pub const GRANT_CLIENT_CREDENTIALS: &str = "client_credentials";
/// Grant type used to obtain a token on behalf of an agency client
pub const GRANT_AGENCY_CLIENT_CREDENTIALS: &str = "agency_client_credentials";
/// Grant type used to refresh an access token
pub const GRANT_REFRESH_TOKEN: &str = "refresh_token";
