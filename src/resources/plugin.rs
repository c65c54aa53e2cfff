use super::{bracketed, is_unset_str, or_blank, EntityRef, Resource};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Plugin installed through the top level `/plugins` collection.
///
/// The plugin configuration is free-form JSON; the gateway validates it
/// against the plugin's own schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginRequest {
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub instance_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub protocols: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PluginResponse {
    pub id: String,
    pub name: Option<String>,
    pub instance_name: Option<String>,
    pub service: Option<EntityRef>,
    pub route: Option<EntityRef>,
    pub consumer: Option<EntityRef>,
    pub protocols: Option<Vec<String>>,
    pub enabled: Option<bool>,
    pub config: Option<Value>,
    pub tags: Option<Vec<String>>,
}

impl PluginResponse {
    /// Which entity the plugin is applied to, `global` when none.
    #[must_use]
    pub fn scope(&self) -> String {
        let scopes: Vec<String> = [
            ("service", &self.service),
            ("route", &self.route),
            ("consumer", &self.consumer),
        ]
        .into_iter()
        .filter_map(|(label, entity)| entity.as_ref().map(|e| format!("{label}={}", e.id)))
        .collect();

        if scopes.is_empty() {
            "global".to_string()
        } else {
            scopes.join(" ")
        }
    }
}

impl Resource for PluginResponse {
    fn id(&self) -> &str {
        &self.id
    }

    fn summary(&self) -> String {
        format!(
            "{} enabled: {} protocols: {} scope: {}",
            or_blank(self.name.as_deref()),
            or_blank(self.enabled.as_ref()),
            bracketed(self.protocols.as_deref()),
            self.scope()
        )
    }
}
