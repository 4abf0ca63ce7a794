use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::common::{loose, MasterRecord, RecordId, SortKind};

// ============================================================================
// Record
// ============================================================================

/// Производитель (make) товара
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Make {
    #[serde(rename = "makeid")]
    pub id: RecordId,

    #[serde(rename = "makename", default, deserialize_with = "loose::string")]
    pub name: String,
}

impl MasterRecord for Make {
    type Payload = MakePayload;

    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "makeid" => Some(self.id.as_string()),
            "makename" => Some(self.name.clone()),
            _ => None,
        }
    }

    fn search_fields() -> &'static [&'static str] {
        &["makeid", "makename"]
    }

    fn sort_kind(field: &str) -> SortKind {
        match field {
            "makeid" => SortKind::Numeric,
            _ => SortKind::Text,
        }
    }

    fn created_id(ack: &Value) -> Option<RecordId> {
        ack.get("makeId").and_then(loose::id_from_value)
    }

    fn collection_name() -> &'static str {
        "makes"
    }

    fn element_name() -> &'static str {
        "Make"
    }

    fn list_name() -> &'static str {
        "Makes"
    }
}

// ============================================================================
// Payload
// ============================================================================

/// Body of create/update; the id is generated server-side and travels in the URL.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct MakePayload {
    #[serde(rename = "MakeName")]
    pub name: String,
}
