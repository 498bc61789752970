/// User agent string used in HTTP requests to identify this client to the IG Markets API
pub const USER_AGENT: &str = "ig-alert-bridge/0.1.0";
/// Default session time-to-live in seconds before a liveness probe is required (20 minutes)
pub const DEFAULT_SESSION_TTL_SECS: u64 = 20 * 60;
/// Default order size applied when an instruction does not specify one
pub const DEFAULT_ORDER_SIZE: f64 = 1.0;
/// Default expiry token for OTC positions ("-" means none)
pub const DEFAULT_EXPIRY: &str = "-";
/// Default currency code applied to orders when the instruction omits one
pub const DEFAULT_CURRENCY_CODE: &str = "EUR";
/// Base URL for the IG Markets demo REST API
pub const DEMO_REST_BASE_URL: &str = "https://demo-api.ig.com/gateway/deal";
/// Base URL for the IG Markets live REST API
pub const LIVE_REST_BASE_URL: &str = "https://api.ig.com/gateway/deal";
/// Length of client-generated deal references
pub const DEAL_REFERENCE_LEN: usize = 30;
