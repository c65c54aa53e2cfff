//! Request and response logging utilities with automatic secret redaction.
//!
//! Consumer credential payloads carry passwords, keys and secrets. Every body
//! that reaches the log goes through [`redact_body`], which masks those fields
//! before the text is emitted at trace level.

use crate::constants;
use serde_json::Value;
use tracing::{debug, info, trace};

/// Redacts sensitive values from strings
#[must_use]
pub fn redact_sensitive_value(value: &str) -> String {
    if value.is_empty() {
        value.to_string()
    } else {
        constants::REDACTED.to_string()
    }
}

/// Masks credential fields anywhere in a JSON body.
///
/// Bodies that are not JSON are returned unchanged.
#[must_use]
pub fn redact_body(body: &str) -> String {
    let Ok(mut value) = serde_json::from_str::<Value>(body) else {
        return body.to_string();
    };
    redact_value(&mut value);
    value.to_string()
}

fn redact_value(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (name, field) in map.iter_mut() {
                if constants::is_secret_field(name) {
                    if let Value::String(text) = field {
                        *text = redact_sensitive_value(text);
                    }
                } else {
                    redact_value(field);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact_value),
        _ => {}
    }
}

/// Logs an HTTP request with optional headers and body
pub fn log_request(
    method: &str,
    url: &str,
    headers: Option<&reqwest::header::HeaderMap>,
    body: Option<&str>,
) {
    info!(
        target: "kconf::executor",
        "→ {} {}",
        method.to_uppercase(),
        url
    );

    if let Some(header_map) = headers {
        debug!(target: "kconf::executor", "Request headers:");
        for (name, value) in header_map {
            debug!(
                target: "kconf::executor",
                "  {}: {}",
                name.as_str(),
                String::from_utf8_lossy(value.as_bytes())
            );
        }
    }

    if let Some(body_content) = body {
        trace!(
            target: "kconf::executor",
            "Request body: {}",
            redact_body(body_content)
        );
    }
}

/// Logs an HTTP response status line and optional body
pub fn log_response(status_line: &str, duration_ms: u128, body: Option<&str>, max_body_len: usize) {
    info!(
        target: "kconf::executor",
        "← {} ({}ms)",
        status_line,
        duration_ms
    );

    let Some(body_content) = body else {
        return;
    };

    let redacted = redact_body(body_content);
    if redacted.len() > max_body_len {
        let cut = floor_char_boundary(&redacted, max_body_len);
        trace!(
            target: "kconf::executor",
            "Response body: {} (truncated at {} chars)",
            &redacted[..cut],
            max_body_len
        );
    } else {
        trace!(
            target: "kconf::executor",
            "Response body: {}",
            redacted
        );
    }
}

fn floor_char_boundary(text: &str, index: usize) -> usize {
    (0..=index.min(text.len()))
        .rev()
        .find(|i| text.is_char_boundary(*i))
        .unwrap_or(0)
}

/// Gets the maximum body length from `KCONF_LOG_MAX_BODY` environment variable
#[must_use]
pub fn get_max_body_len() -> usize {
    std::env::var(constants::ENV_KCONF_LOG_MAX_BODY)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1000)
}
