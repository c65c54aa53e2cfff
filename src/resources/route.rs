use super::{bracketed, is_unset_str, or_blank, EntityRef, Resource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub protocols: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strip_path: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteResponse {
    pub id: String,
    pub name: Option<String>,
    pub protocols: Option<Vec<String>>,
    pub methods: Option<Vec<String>>,
    pub paths: Option<Vec<String>>,
    pub hosts: Option<Vec<String>>,
    pub strip_path: Option<bool>,
    pub service: Option<EntityRef>,
    pub tags: Option<Vec<String>>,
}

impl Resource for RouteResponse {
    fn id(&self) -> &str {
        &self.id
    }

    fn summary(&self) -> String {
        format!(
            "{} --> protocols: {} methods: {} paths: {} service: {}",
            or_blank(self.name.as_deref()),
            bracketed(self.protocols.as_deref()),
            bracketed(self.methods.as_deref()),
            bracketed(self.paths.as_deref()),
            or_blank(self.service.as_ref().map(|s| s.id.as_str())),
        )
    }
}
