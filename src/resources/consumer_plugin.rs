//! Payloads attached to a consumer.
//!
//! Two gateway API shapes live here. Credentials (basic-auth, key-auth, JWT)
//! are posted as flat bodies to their own sub-resource under the consumer.
//! Traffic-control and logging plugins (IP restriction, rate limiting,
//! request size limiting, syslog) are posted to the consumer's `plugins`
//! collection wrapped in a [`PluginInstall`] envelope.

use super::{is_unset_num, is_unset_str, or_blank, EntityRef, Resource};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAuthRequest {
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BasicAuthResponse {
    pub id: String,
    pub username: Option<String>,
    pub consumer: Option<EntityRef>,
}

impl Resource for BasicAuthResponse {
    fn id(&self) -> &str {
        &self.id
    }

    fn summary(&self) -> String {
        format!("username: {}", or_blank(self.username.as_deref()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyAuthRequest {
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub key: Option<String>,
    /// Seconds until the key expires.
    #[serde(default, skip_serializing_if = "is_unset_num")]
    pub ttl: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeyAuthResponse {
    pub id: String,
    pub key: Option<String>,
    pub ttl: Option<i64>,
    pub consumer: Option<EntityRef>,
}

impl Resource for KeyAuthResponse {
    fn id(&self) -> &str {
        &self.id
    }

    fn summary(&self) -> String {
        format!("ttl: {}", or_blank(self.ttl.as_ref()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtRequest {
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub algorithm: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub secret: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JwtResponse {
    pub id: String,
    pub consumer: Option<EntityRef>,
    pub algorithm: Option<String>,
    pub key: Option<String>,
    pub secret: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl Resource for JwtResponse {
    fn id(&self) -> &str {
        &self.id
    }

    fn summary(&self) -> String {
        format!("algorithm: {}", or_blank(self.algorithm.as_deref()))
    }
}

/// Generic plugin install body: `{name, instance_name, config}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginInstall<C> {
    pub name: &'static str,
    #[serde(skip_serializing_if = "is_unset_str")]
    pub instance_name: Option<String>,
    pub config: C,
}

impl<C: Serialize> PluginInstall<C> {
    #[must_use]
    pub const fn new(name: &'static str, instance_name: Option<String>, config: C) -> Self {
        Self {
            name,
            instance_name,
            config,
        }
    }
}

/// Gateway answer to a [`PluginInstall`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(bound = "C: DeserializeOwned")]
pub struct PluginInstalled<C> {
    pub id: String,
    pub name: Option<String>,
    pub instance_name: Option<String>,
    pub enabled: Option<bool>,
    pub consumer: Option<EntityRef>,
    pub config: Option<C>,
}

impl<C: DeserializeOwned> Resource for PluginInstalled<C> {
    fn id(&self) -> &str {
        &self.id
    }

    fn summary(&self) -> String {
        format!(
            "{} (instance: {})",
            or_blank(self.name.as_deref()),
            or_blank(self.instance_name.as_deref())
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpRestrictionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deny: Option<Vec<String>>,
}

impl IpRestrictionConfig {
    /// Empty lists are sent as absent so the gateway keeps its defaults.
    #[must_use]
    pub fn new(allow: Vec<String>, deny: Vec<String>) -> Self {
        Self {
            allow: (!allow.is_empty()).then_some(allow),
            deny: (!deny.is_empty()).then_some(deny),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitingConfig {
    #[serde(default, skip_serializing_if = "is_unset_num")]
    pub second: Option<i32>,
    #[serde(default, skip_serializing_if = "is_unset_num")]
    pub minute: Option<i32>,
    #[serde(default, skip_serializing_if = "is_unset_num")]
    pub hour: Option<i32>,
    #[serde(default, skip_serializing_if = "is_unset_num")]
    pub day: Option<i32>,
    #[serde(default, skip_serializing_if = "is_unset_num")]
    pub error_code: Option<i32>,
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSizeLimitingConfig {
    #[serde(default, skip_serializing_if = "is_unset_num")]
    pub allowed_payload_size: Option<i32>,
    /// `bytes`, `kilobytes` or `megabytes`.
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub size_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_content_length: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyslogConfig {
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub log_level: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub successful_severity: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub client_errors_severity: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub server_errors_severity: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub facility: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants;
    use serde_json::json;

    #[test]
    fn test_key_auth_omits_zero_ttl() {
        let request = KeyAuthRequest {
            key: Some("k".to_string()),
            ttl: Some(0),
        };
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({"key": "k"}));
    }

    #[test]
    fn test_envelope_shape() {
        let install = PluginInstall::new(
            constants::PLUGIN_RATE_LIMITING,
            Some("per-minute".to_string()),
            RateLimitingConfig {
                minute: Some(10),
                error_code: Some(429),
                ..Default::default()
            },
        );
        assert_eq!(
            serde_json::to_value(&install).unwrap(),
            json!({
                "name": "rate-limiting",
                "instance_name": "per-minute",
                "config": {"minute": 10, "error_code": 429}
            })
        );
    }

    #[test]
    fn test_envelope_without_instance_name() {
        let install = PluginInstall::new(
            constants::PLUGIN_IP_RESTRICTION,
            None,
            IpRestrictionConfig::new(vec!["10.0.0.0/8".to_string()], vec![]),
        );
        assert_eq!(
            serde_json::to_value(&install).unwrap(),
            json!({
                "name": "ip-restriction",
                "config": {"allow": ["10.0.0.0/8"]}
            })
        );
    }

    #[test]
    fn test_installed_plugin_ignores_unknown_config_fields() {
        let installed: PluginInstalled<RateLimitingConfig> = serde_json::from_value(json!({
            "id": "p1",
            "name": "rate-limiting",
            "config": {"minute": 10, "policy": "local", "second": null}
        }))
        .unwrap();
        let config = installed.config.unwrap();
        assert_eq!(config.minute, Some(10));
        assert_eq!(config.second, None);
    }
}
