use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::common::{loose, MasterRecord, RecordId, SortKind};

// ============================================================================
// Record
// ============================================================================

/// Бренд (торговая марка) товара
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Brand {
    #[serde(rename = "brandid")]
    pub id: RecordId,

    #[serde(rename = "brandname", default, deserialize_with = "loose::string")]
    pub name: String,
}

impl MasterRecord for Brand {
    type Payload = BrandPayload;

    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "brandid" => Some(self.id.as_string()),
            "brandname" => Some(self.name.clone()),
            _ => None,
        }
    }

    fn search_fields() -> &'static [&'static str] {
        &["brandid", "brandname"]
    }

    fn sort_kind(field: &str) -> SortKind {
        match field {
            "brandid" => SortKind::Numeric,
            _ => SortKind::Text,
        }
    }

    fn created_id(ack: &Value) -> Option<RecordId> {
        ack.get("brandId").and_then(loose::id_from_value)
    }

    fn collection_name() -> &'static str {
        "brands"
    }

    fn element_name() -> &'static str {
        "Brand"
    }

    fn list_name() -> &'static str {
        "Brands"
    }
}

// ============================================================================
// Payload
// ============================================================================

/// Body of create/update; the id is generated server-side and travels in the URL.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct BrandPayload {
    #[serde(rename = "BrandName")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetched_row_mapping() {
        let rows: Vec<Brand> = serde_json::from_str(
            r#"[{"brandid": 1, "brandname": "Bosch", "created_date": "2024-03-15T14:02:26.123Z"}]"#,
        )
        .unwrap();
        assert_eq!(rows[0].id, RecordId(1));
        assert_eq!(rows[0].name, "Bosch");
    }

    #[test]
    fn test_payload_uses_form_keys() {
        let payload = BrandPayload { name: "Bosch".into() };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"BrandName": "Bosch"}));
    }

    #[test]
    fn test_created_id_from_ack() {
        let ack = serde_json::json!({"message": "Added", "brandId": 9});
        assert_eq!(Brand::created_id(&ack), Some(RecordId(9)));
        assert_eq!(Brand::created_id(&serde_json::json!({})), None);
    }
}
