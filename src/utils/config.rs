use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Gets an environment variable or returns a default value if it is absent
/// or cannot be parsed into the requested type.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Gets an environment variable and parses it, returning None if it is
/// absent or invalid.
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().ok(),
        Err(_) => None,
    }
}
