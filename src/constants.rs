/// Default base URL of the CodeChef REST API
pub const DEFAULT_BASE_URL: &str = "https://api.codechef.com";
/// Default OAuth token endpoint of the CodeChef API
pub const DEFAULT_TOKEN_URL: &str = "https://api.codechef.com/oauth/token";
/// Scope requested by the client credentials grant when none is configured
pub const DEFAULT_SCOPE: &str = "public";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
/// Value of the `status` field in a successful token exchange response
pub const TOKEN_STATUS_OK: &str = "OK";
/// User agent string used in HTTP requests to identify this client to the CodeChef API
pub const USER_AGENT: &str = concat!("codechef-client/", env!("CARGO_PKG_VERSION"));
