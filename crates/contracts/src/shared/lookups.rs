//! Option lists for select fields (`GET /api/items/dropdown-data`).
//!
//! The endpoint answers `{ "groups": [{groupid, groupname}], "makes": [...],
//! "brands": [...], "parties": [{partyid, partyname}] }`. Each row carries
//! exactly one `*id` and one `*name` column, which is all we rely on.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::common::loose;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupOption {
    pub value: String,
    pub label: String,
}

impl LookupOption {
    /// Build an option from one lookup row; `None` if it has no id column.
    pub fn from_row(row: &Value) -> Option<Self> {
        let obj = row.as_object()?;
        let value = obj
            .iter()
            .find(|(k, _)| k.ends_with("id"))
            .map(|(_, v)| loose::value_text(v))
            .filter(|v| !v.is_empty())?;
        let label = obj
            .iter()
            .find(|(k, _)| k.ends_with("name"))
            .map(|(_, v)| loose::value_text(v))
            .unwrap_or_else(|| value.clone());
        Some(Self { value, label })
    }
}

/// Named option lists, keyed by the response's top-level keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Lookups {
    pub sets: BTreeMap<String, Vec<LookupOption>>,
}

impl Lookups {
    pub fn from_value(value: &Value) -> Self {
        let mut sets = BTreeMap::new();
        if let Some(obj) = value.as_object() {
            for (key, rows) in obj {
                let options = rows
                    .as_array()
                    .map(|rows| rows.iter().filter_map(LookupOption::from_row).collect())
                    .unwrap_or_default();
                sets.insert(key.clone(), options);
            }
        }
        Self { sets }
    }

    pub fn options(&self, set: &str) -> &[LookupOption] {
        self.sets.get(set).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn label(&self, set: &str, value: &str) -> Option<&str> {
        self.options(set)
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropdown_response() {
        let value = serde_json::json!({
            "groups": [{"groupid": 3, "groupname": "Spark Plugs"}],
            "brands": [{"brandid": 1, "brandname": "Bosch"}, {"brandname": "orphan"}],
            "parties": [{"partyid": "7", "partyname": "Lakshmi Traders"}]
        });
        let lookups = Lookups::from_value(&value);
        assert_eq!(lookups.options("groups").len(), 1);
        assert_eq!(lookups.options("brands").len(), 1);
        assert_eq!(lookups.label("parties", "7"), Some("Lakshmi Traders"));
        assert_eq!(lookups.label("groups", "99"), None);
        assert!(lookups.options("makes").is_empty());
    }
}
