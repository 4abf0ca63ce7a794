use contracts::domain::a002_make::aggregate::{Make, MakePayload};

use crate::shared::master_data::config::no_computed;
use crate::shared::master_data::{
    AfterSave, Column, EntityConfig, FieldKind, FormField, FormValues, ValidationErrors,
};

pub static MAKE_CONFIG: EntityConfig<Make> = EntityConfig {
    base_path: "/makes",
    entity_name: "Make",
    list_title: "Makes",
    columns: &[
        Column::numeric("makeid", "Make ID"),
        Column::text("makename", "Make Name"),
    ],
    form_fields: &[
        FormField::new("MakeID", "Make ID", FieldKind::ReadOnly),
        FormField::new("MakeName", "Make Name", FieldKind::Text).required(),
    ],
    name_field: "MakeName",
    duplicate_message: "Make Name already exists!",
    search_options: &[("makeid", "Make ID"), ("makename", "Make Name")],
    default_sort: None,
    after_save: AfterSave::ReturnToList,
    in_use_message: "Record exists in item master, cannot delete",
    in_use_from_server: false,
    scope: every_make,
    to_form,
    blank_form,
    to_payload,
    lookups_path: None,
    computed: no_computed,
    detail_tabs: &[],
};

fn every_make(_: &Make) -> bool {
    true
}

fn to_form(record: &Make) -> FormValues {
    FormValues::new()
        .with("MakeID", record.id.as_string())
        .with("MakeName", record.name.clone())
}

fn blank_form() -> FormValues {
    FormValues::new().with("MakeID", "New").with("MakeName", "")
}

fn to_payload(form: &FormValues) -> Result<MakePayload, ValidationErrors> {
    Ok(MakePayload {
        name: form.get("MakeName").trim().to_string(),
    })
}
