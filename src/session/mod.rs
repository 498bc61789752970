/// Authentication handler performing the login call
pub mod auth;
/// Session tokens and the authenticator trait
pub mod interface;
/// TTL-based session lifecycle management
pub mod manager;
