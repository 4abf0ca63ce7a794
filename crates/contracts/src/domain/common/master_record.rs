use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::fmt::Debug;

use super::RecordId;

/// How a column compares when the list is sorted by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    /// Case-insensitive text comparison.
    Text,
    /// Numeric comparison; non-numeric text falls back to its extracted digits.
    Numeric,
}

/// Трейт для записи справочника
///
/// Everything the generic list/edit engine needs to know about one entity
/// type. Field names passed to `field_text` and `sort_kind` are the
/// lower-case wire names of the fetched rows.
pub trait MasterRecord:
    Clone + PartialEq + Debug + DeserializeOwned + Send + Sync + 'static
{
    /// Body of `POST {base}/add` and `PUT {base}/edit/{id}`.
    type Payload: Serialize + Clone + Debug + Send + Sync + 'static;

    // ============================================================================
    // Instance data
    // ============================================================================

    /// Stable unique identifier
    fn id(&self) -> RecordId;

    /// Display name, also the subject of the duplicate-name guard
    fn name(&self) -> &str;

    /// Text of one field for search, sorting and table cells
    fn field_text(&self, field: &str) -> Option<String>;

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Fields scanned by "search all"
    fn search_fields() -> &'static [&'static str];

    /// Comparator family per field
    fn sort_kind(_field: &str) -> SortKind {
        SortKind::Text
    }

    /// Generated id echoed by the create endpoint, if any
    fn created_id(ack: &Value) -> Option<RecordId>;

    /// REST collection segment, e.g. "brands" for `/api/brands/all`
    fn collection_name() -> &'static str;

    /// Singular UI name, e.g. "Brand"
    fn element_name() -> &'static str;

    /// Plural UI name, e.g. "Brands"
    fn list_name() -> &'static str;
}
