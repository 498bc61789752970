/// Request models for API calls
pub mod requests;
/// Response models from API calls and results returned to the caller
pub mod responses;
