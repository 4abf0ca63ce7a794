//! Per-entity settings for the generic List/New/Edit page.

use contracts::domain::common::{MasterRecord, RecordId};
use leptos::prelude::AnyView;

use super::error::ValidationErrors;
use super::form::{parse_number, FormValues};
use super::mode::Mode;
use super::view::SortDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Shown, never edited (generated ids)
    ReadOnly,
    Text,
    Number,
    TextArea,
    Checkbox,
    /// Options come from the named lookup set
    Select(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FormField {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub fn is_editable(&self) -> bool {
        self.kind != FieldKind::ReadOnly
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    Text,
    Number,
    /// Money: cleaned, two decimals, grouped thousands
    Amount,
}

/// List column, keyed by wire field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub field: &'static str,
    pub label: &'static str,
    pub format: CellFormat,
}

impl Column {
    pub const fn text(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            format: CellFormat::Text,
        }
    }

    pub const fn numeric(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            format: CellFormat::Number,
        }
    }

    pub const fn amount(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            format: CellFormat::Amount,
        }
    }

    pub fn align_right(&self) -> bool {
        self.format != CellFormat::Text
    }
}

/// Read-only panel offered next to the details of a saved record.
#[derive(Clone, Copy)]
pub struct DetailTab {
    pub label: &'static str,
    pub render: fn(RecordId) -> AnyView,
}

/// What a plain Save does once the server accepted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterSave {
    ReturnToList,
    /// Keep the form open with the saved values as the new baseline
    StayOpen,
}

pub struct EntityConfig<R: MasterRecord> {
    /// Route prefix, e.g. `/brands`
    pub base_path: &'static str,
    /// Singular used in toasts: "Brand added successfully!"
    pub entity_name: &'static str,
    pub list_title: &'static str,
    pub columns: &'static [Column],
    pub form_fields: &'static [FormField],
    /// Form key compared by the duplicate-name guard
    pub name_field: &'static str,
    pub duplicate_message: &'static str,
    /// Field-restricted search choices (wire field, label)
    pub search_options: &'static [(&'static str, &'static str)],
    pub default_sort: Option<(&'static str, SortDirection)>,
    pub after_save: AfterSave,
    /// Toast for a delete rejected with 400
    pub in_use_message: &'static str,
    /// Prefer the server's own 400 explanation over `in_use_message`
    pub in_use_from_server: bool,
    /// Which records of the collection belong to this page
    pub scope: fn(&R) -> bool,
    pub to_form: fn(&R) -> FormValues,
    pub blank_form: fn() -> FormValues,
    pub to_payload: fn(&FormValues) -> Result<R::Payload, ValidationErrors>,
    /// Path of the select-option endpoint, for pages with select fields
    pub lookups_path: Option<&'static str>,
    /// Read-only figures derived from the form, shown beside it
    pub computed: fn(&FormValues) -> Vec<(&'static str, String)>,
    /// Extra tabs in Edit mode
    pub detail_tabs: &'static [DetailTab],
}

impl<R: MasterRecord> EntityConfig<R> {
    pub fn field_keys(&self) -> Vec<&'static str> {
        self.form_fields.iter().map(|f| f.key).collect()
    }

    pub fn required_keys(&self) -> Vec<&'static str> {
        self.form_fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.key)
            .collect()
    }

    pub fn field(&self, key: &str) -> Option<&'static FormField> {
        self.form_fields.iter().find(|f| f.key == key)
    }

    pub fn first_input(&self) -> Option<&'static str> {
        self.form_fields
            .iter()
            .find(|f| f.is_editable())
            .map(|f| f.key)
    }

    /// Required fields first, then numeric parsing, in field order.
    pub fn validate(&self, form: &FormValues) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for field in self.form_fields.iter().filter(|f| f.required) {
            if form.get(field.key).trim().is_empty() {
                errors.push(field.key, format!("{} is required", field.label));
            }
        }
        for field in self
            .form_fields
            .iter()
            .filter(|f| f.kind == FieldKind::Number)
        {
            if parse_number(form.get(field.key)).is_err() {
                errors.push(field.key, format!("{} must be a valid number", field.label));
            }
        }
        errors
    }

    /// Case-insensitive trimmed name clash within this page's scope,
    /// ignoring the record being edited.
    pub fn is_duplicate(&self, records: &[R], name: &str, editing: Option<RecordId>) -> bool {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return false;
        }
        records
            .iter()
            .filter(|r| (self.scope)(r))
            .filter(|r| Some(r.id()) != editing)
            .any(|r| r.name().trim().to_lowercase() == wanted)
    }

    pub fn form_title(&self, target: Mode, values: &FormValues) -> String {
        match target {
            Mode::Edit(_) => format!("Edit {}: {}", self.entity_name, values.get(self.name_field)),
            _ => format!("New {}", self.entity_name),
        }
    }

    pub fn delete_confirmation(&self) -> String {
        format!("Are you sure you want to delete this {}?", self.entity_name)
    }
}

/// `computed` for pages without derived figures.
pub fn no_computed(_: &FormValues) -> Vec<(&'static str, String)> {
    Vec::new()
}

/// Application-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub page_size: usize,
    pub toast_duration_ms: u32,
    /// Backend port when the API base is derived from `window.location`
    pub api_port: u16,
}

impl AppConfig {
    pub const DEFAULT: AppConfig = AppConfig {
        page_size: 50,
        toast_duration_ms: 3000,
        api_port: 5000,
    };
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_item::config::ITEM_CONFIG;
    use crate::domain::a006_supplier::config::SUPPLIER_CONFIG;
    use contracts::domain::a004_party::aggregate::Party;

    #[test]
    fn test_item_validation_order() {
        let form = FormValues::new()
            .with("ItemName", "Bosch Filter")
            .with("HSNCode", "8421")
            .with("GroupID", "3")
            .with("BrandID", "1")
            .with("MakeID", "4")
            .with("CGST", "nine")
            .with("Cost", "12.5");
        let errors = ITEM_CONFIG.validate(&form);
        assert_eq!(errors.first_field(), Some("SGST"));
        assert_eq!(
            errors.summary(),
            "SGST is required, CGST must be a valid number"
        );
    }

    #[test]
    fn test_duplicate_guard_respects_scope_and_self() {
        let parties: Vec<Party> = serde_json::from_value(serde_json::json!([
            {"partyid": 1, "partytype": 1, "partyname": "Ravi Motors"},
            {"partyid": 2, "partytype": 2, "partyname": "Lakshmi Traders"}
        ]))
        .unwrap();
        // a customer of the same name does not clash with suppliers
        assert!(!SUPPLIER_CONFIG.is_duplicate(&parties, "ravi motors", None));
        assert!(SUPPLIER_CONFIG.is_duplicate(&parties, " LAKSHMI traders ", None));
        assert!(!SUPPLIER_CONFIG.is_duplicate(&parties, "Lakshmi Traders", Some(RecordId(2))));
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.page_size, 50);
        assert_eq!(config.toast_duration_ms, 3000);
        assert_eq!(ITEM_CONFIG.first_input(), Some("GroupID"));
    }
}
