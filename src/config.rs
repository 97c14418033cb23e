//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client is shipped as a static bundle embedded in the backend, so
//! settings are fixed at compile time. Each overridable value reads an
//! environment variable through `option_env!` and falls back to the default
//! used by a same-origin deployment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Prefix for every backend REST endpoint.
pub const API_BASE: &str = match option_env!("SIMPLE_SHARE_API_BASE") {
    Some(base) => base,
    None => "/api",
};

/// Raw log level name; parsed by [`log_level`].
pub const LOG_LEVEL: &str = match option_env!("SIMPLE_SHARE_LOG") {
    Some(level) => level,
    None => "info",
};

/// Root route. Guard redirects always land here.
pub const ROOT_PATH: &str = "/";

/// Backend entry point that starts the OIDC login flow.
pub const LOGIN_URL: &str = "/auth/login";

/// `localStorage` key holding the share name -> password map.
pub const SHARE_PASSWORDS_KEY: &str = "share_passwords";

/// Build an absolute API path from a suffix such as `/shares`.
pub fn api_path(suffix: &str) -> String {
    format!("{}{suffix}", API_BASE.trim_end_matches('/'))
}

/// Parse the configured log level, falling back to `Info`.
pub fn log_level() -> log::Level {
    parse_log_level(LOG_LEVEL)
}

fn parse_log_level(raw: &str) -> log::Level {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => log::Level::Error,
        "warn" | "warning" => log::Level::Warn,
        "debug" => log::Level::Debug,
        "trace" => log::Level::Trace,
        _ => log::Level::Info,
    }
}
