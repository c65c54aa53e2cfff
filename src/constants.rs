//! Centralized string constants for the kconf CLI
//!
//! This module contains commonly used string literals to:
//! - Keep gateway path segments and plugin names in one place
//! - Ensure consistency between request building and rendering

// Content Types
pub const CONTENT_TYPE_JSON_UTF8: &str = "application/json; charset=UTF-8";

// Server defaults
pub const DEFAULT_KONG_ADDRESS: &str = "localhost";
pub const DEFAULT_KONG_PORT: u16 = 8001;
pub const SCHEME_HTTP: &str = "http://";
pub const SCHEME_HTTPS: &str = "https://";

// Admin API collections
pub const PATH_SERVICES: &str = "services";
pub const PATH_ROUTES: &str = "routes";
pub const PATH_CONSUMERS: &str = "consumers";
pub const PATH_PLUGINS: &str = "plugins";
pub const PATH_UPSTREAMS: &str = "upstreams";
pub const PATH_TARGETS: &str = "targets";

// Consumer credential sub-resources
pub const PATH_BASIC_AUTH: &str = "basic-auth";
pub const PATH_KEY_AUTH: &str = "key-auth";
pub const PATH_JWT: &str = "jwt";

// Plugin names used in the plugin install envelope
pub const PLUGIN_IP_RESTRICTION: &str = "ip-restriction";
pub const PLUGIN_RATE_LIMITING: &str = "rate-limiting";
pub const PLUGIN_REQUEST_SIZE_LIMITING: &str = "request-size-limiting";
pub const PLUGIN_SYSLOG: &str = "syslog";

// Environment Variables (logging only)
pub const ENV_KCONF_LOG: &str = "KCONF_LOG";
pub const ENV_KCONF_LOG_FORMAT: &str = "KCONF_LOG_FORMAT";
pub const ENV_KCONF_LOG_FILE: &str = "KCONF_LOG_FILE";
pub const ENV_KCONF_LOG_MAX_BODY: &str = "KCONF_LOG_MAX_BODY";

// Rendering
pub const STATUS_LINE_LABEL: &str = "http response status code";
pub const REDACTED: &str = "[REDACTED]";

// Error Context Messages
pub const ERR_CONNECTION: &str = "Check that Kong is running and the admin address and port are correct.";
pub const ERR_NOT_FOUND: &str = "Check the identifier with the matching list command.";
pub const ERR_JSON_SYNTAX: &str = "The gateway response does not match the expected payload.";

/// Check if a JSON field carries credential material that must not be logged
#[must_use]
pub fn is_secret_field(name: &str) -> bool {
    matches!(
        name.to_lowercase().as_str(),
        "password" | "secret" | "key" | "rsa_public_key" | "private_key"
    )
}
