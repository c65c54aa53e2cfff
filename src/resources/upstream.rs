use super::{is_unset_num, is_unset_str, or_blank, EntityRef, Resource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamRequest {
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub name: Option<String>,
    /// `round-robin`, `consistent-hashing`, `least-connections` or `latency`.
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub algorithm: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub hash_on: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub hash_fallback: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub hash_on_header: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset_num")]
    pub slots: Option<u32>,
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub host_header: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpstreamResponse {
    pub id: String,
    pub name: Option<String>,
    pub algorithm: Option<String>,
    pub hash_on: Option<String>,
    pub hash_fallback: Option<String>,
    pub hash_on_header: Option<String>,
    pub slots: Option<u32>,
    pub host_header: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl Resource for UpstreamResponse {
    fn id(&self) -> &str {
        &self.id
    }

    fn summary(&self) -> String {
        format!(
            "{} algorithm: {}",
            or_blank(self.name.as_deref()),
            or_blank(self.algorithm.as_deref())
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRequest {
    /// `host:port` of the backend.
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset_num")]
    pub weight: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TargetResponse {
    pub id: String,
    pub target: Option<String>,
    pub weight: Option<u32>,
    pub upstream: Option<EntityRef>,
    pub tags: Option<Vec<String>>,
}

impl Resource for TargetResponse {
    fn id(&self) -> &str {
        &self.id
    }

    fn summary(&self) -> String {
        format!(
            "{} weight: {}",
            or_blank(self.target.as_deref()),
            or_blank(self.weight.as_ref())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_target_summary() {
        let target: TargetResponse = serde_json::from_value(json!({
            "id": "1343894e-404a-4f9e-a982-9e5c0e9d1733",
            "target": "192.168.68.107:8080",
            "weight": 100,
            "upstream": {"id": "u1"}
        }))
        .unwrap();
        assert_eq!(target.summary(), "192.168.68.107:8080 weight: 100");
    }

    #[test]
    fn test_upstream_request_omits_zero_slots() {
        let request = UpstreamRequest {
            name: Some("backend".to_string()),
            slots: Some(0),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({"name": "backend"}));
    }
}
