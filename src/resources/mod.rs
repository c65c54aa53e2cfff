//! Request and response payload shapes of the Kong admin API.
//!
//! Request payloads skip every optional field that is absent, empty or zero so
//! that the gateway applies its own defaults (and so a PATCH only touches the
//! fields the user passed). Response payloads keep everything but `id`
//! optional: the gateway answers `null` for unset fields and may add fields
//! this tool does not know about.

pub mod consumer;
pub mod consumer_plugin;
pub mod plugin;
pub mod route;
pub mod service;
pub mod status;
pub mod upstream;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use consumer::{ConsumerRequest, ConsumerResponse};
pub use consumer_plugin::{
    BasicAuthRequest, BasicAuthResponse, IpRestrictionConfig, JwtRequest, JwtResponse,
    KeyAuthRequest, KeyAuthResponse, PluginInstall, PluginInstalled, RateLimitingConfig,
    RequestSizeLimitingConfig, SyslogConfig,
};
pub use plugin::{PluginRequest, PluginResponse};
pub use route::{RouteRequest, RouteResponse};
pub use service::{ServiceRequest, ServiceResponse};
pub use status::NodeStatus;
pub use upstream::{TargetRequest, TargetResponse, UpstreamRequest, UpstreamResponse};

/// A gateway entity as returned by the admin API.
pub trait Resource: DeserializeOwned {
    /// The entity id assigned by the gateway.
    fn id(&self) -> &str;

    /// One-line description used by list and query rendering.
    fn summary(&self) -> String;
}

/// One page of a list response.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    /// Opaque pagination cursor.
    #[serde(default)]
    pub next: Option<String>,
}

/// Reference to another entity, e.g. the service a route belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: String,
}

impl EntityRef {
    /// Wraps an id, treating a missing or empty id as no reference.
    #[must_use]
    pub fn from_id(id: Option<String>) -> Option<Self> {
        id.filter(|id| !id.is_empty()).map(|id| Self { id })
    }
}

#[allow(clippy::ref_option)]
pub(crate) fn is_unset_str(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

#[allow(clippy::ref_option)]
pub(crate) fn is_unset_num<T: Default + PartialEq>(value: &Option<T>) -> bool {
    value.as_ref().is_none_or(|v| *v == T::default())
}

/// Formats an optional value, printing an empty string when absent.
pub(crate) fn or_blank<T: ToString + ?Sized>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

/// Formats a list as `[a,b]`.
pub(crate) fn bracketed(values: Option<&[String]>) -> String {
    format!("[{}]", values.map(|v| v.join(",")).unwrap_or_default())
}
