use super::{is_unset_str, or_blank, Resource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceResponse {
    pub id: String,
    pub name: Option<String>,
    pub protocol: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
    pub enabled: Option<bool>,
    pub tags: Option<Vec<String>>,
}

impl Resource for ServiceResponse {
    fn id(&self) -> &str {
        &self.id
    }

    /// `name --> protocol://host:port/path`
    fn summary(&self) -> String {
        format!(
            "{} --> {}://{}:{}{}",
            or_blank(self.name.as_deref()),
            or_blank(self.protocol.as_deref()),
            or_blank(self.host.as_deref()),
            or_blank(self.port.as_ref()),
            or_blank(self.path.as_deref()),
        )
    }
}
