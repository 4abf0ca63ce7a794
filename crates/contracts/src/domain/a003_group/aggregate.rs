use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::common::{loose, MasterRecord, RecordId, SortKind};

// ============================================================================
// Record
// ============================================================================

/// Группа товаров
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Group {
    #[serde(rename = "groupid")]
    pub id: RecordId,

    #[serde(rename = "groupname", default, deserialize_with = "loose::string")]
    pub name: String,
}

impl MasterRecord for Group {
    type Payload = GroupPayload;

    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "groupid" => Some(self.id.as_string()),
            "groupname" => Some(self.name.clone()),
            _ => None,
        }
    }

    fn search_fields() -> &'static [&'static str] {
        &["groupid", "groupname"]
    }

    fn sort_kind(field: &str) -> SortKind {
        match field {
            "groupid" => SortKind::Numeric,
            _ => SortKind::Text,
        }
    }

    fn created_id(ack: &Value) -> Option<RecordId> {
        ack.get("groupId").and_then(loose::id_from_value)
    }

    fn collection_name() -> &'static str {
        "groups"
    }

    fn element_name() -> &'static str {
        "Group"
    }

    fn list_name() -> &'static str {
        "Groups"
    }
}

// ============================================================================
// Payload
// ============================================================================

/// Body of create/update; the id is generated server-side and travels in the URL.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct GroupPayload {
    #[serde(rename = "GroupName")]
    pub name: String,
}
