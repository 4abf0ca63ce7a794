//! Brand master: one name column, referenced by items.

use contracts::domain::a001_brand::aggregate::{Brand, BrandPayload};

use crate::shared::master_data::config::no_computed;
use crate::shared::master_data::{
    AfterSave, Column, EntityConfig, FieldKind, FormField, FormValues, ValidationErrors,
};

pub static BRAND_CONFIG: EntityConfig<Brand> = EntityConfig {
    base_path: "/brands",
    entity_name: "Brand",
    list_title: "Brands",
    columns: &[
        Column::numeric("brandid", "Brand ID"),
        Column::text("brandname", "Brand Name"),
    ],
    form_fields: &[
        FormField::new("BrandID", "Brand ID", FieldKind::ReadOnly),
        FormField::new("BrandName", "Brand Name", FieldKind::Text).required(),
    ],
    name_field: "BrandName",
    duplicate_message: "Brand Name already exists!",
    search_options: &[("brandid", "Brand ID"), ("brandname", "Brand Name")],
    default_sort: None,
    after_save: AfterSave::ReturnToList,
    in_use_message: "Record exists in item master, cannot delete",
    in_use_from_server: false,
    scope: every_brand,
    to_form,
    blank_form,
    to_payload,
    lookups_path: None,
    computed: no_computed,
    detail_tabs: &[],
};

fn every_brand(_: &Brand) -> bool {
    true
}

fn to_form(record: &Brand) -> FormValues {
    FormValues::new()
        .with("BrandID", record.id.as_string())
        .with("BrandName", record.name.clone())
}

fn blank_form() -> FormValues {
    FormValues::new().with("BrandID", "New").with("BrandName", "")
}

fn to_payload(form: &FormValues) -> Result<BrandPayload, ValidationErrors> {
    Ok(BrandPayload {
        name: form.get("BrandName").trim().to_string(),
    })
}
