use super::{is_unset_str, or_blank, Resource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerRequest {
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset_str")]
    pub custom_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConsumerResponse {
    pub id: String,
    pub username: Option<String>,
    pub custom_id: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl Resource for ConsumerResponse {
    fn id(&self) -> &str {
        &self.id
    }

    fn summary(&self) -> String {
        format!(
            "{} (custom id: {})",
            or_blank(self.username.as_deref()),
            or_blank(self.custom_id.as_deref())
        )
    }
}
