use serde::Deserialize;

/// The subset of the admin API root document shown by `status`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeStatus {
    pub version: Option<String>,
    pub hostname: Option<String>,
}
