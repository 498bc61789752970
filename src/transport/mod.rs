/// HTTP transport with authentication headers and status mapping
pub mod http_client;
/// Retry configuration for allowance-limited requests
pub mod retry;
