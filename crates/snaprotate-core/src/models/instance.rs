use serde::{Deserialize, Serialize};

use super::id_from_number_or_string;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    #[serde(rename = "instanceId", deserialize_with = "id_from_number_or_string")]
    pub instance_id: String,
    pub name: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
}

impl Instance {
    /// Human-friendly label for log lines: the display name when one is set.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(&self.name)
    }
}
