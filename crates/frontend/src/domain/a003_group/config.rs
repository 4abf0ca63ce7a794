//! Item groups (categories).

use contracts::domain::a003_group::aggregate::{Group, GroupPayload};

use crate::shared::master_data::config::no_computed;
use crate::shared::master_data::{
    AfterSave, Column, EntityConfig, FieldKind, FormField, FormValues, ValidationErrors,
};

pub static GROUP_CONFIG: EntityConfig<Group> = EntityConfig {
    base_path: "/groups",
    entity_name: "Group",
    list_title: "Groups",
    columns: &[
        Column::numeric("groupid", "Group ID"),
        Column::text("groupname", "Group Name"),
    ],
    form_fields: &[
        FormField::new("GroupID", "Group ID", FieldKind::ReadOnly),
        FormField::new("GroupName", "Group Name", FieldKind::Text).required(),
    ],
    name_field: "GroupName",
    duplicate_message: "Group Name already exists!",
    search_options: &[("groupid", "Group ID"), ("groupname", "Group Name")],
    default_sort: None,
    after_save: AfterSave::ReturnToList,
    in_use_message: "Record exists in item master, cannot delete",
    in_use_from_server: false,
    scope: every_group,
    to_form,
    blank_form,
    to_payload,
    lookups_path: None,
    computed: no_computed,
    detail_tabs: &[],
};

fn every_group(_: &Group) -> bool {
    true
}

fn to_form(record: &Group) -> FormValues {
    FormValues::new()
        .with("GroupID", record.id.as_string())
        .with("GroupName", record.name.clone())
}

fn blank_form() -> FormValues {
    FormValues::new().with("GroupID", "New").with("GroupName", "")
}

fn to_payload(form: &FormValues) -> Result<GroupPayload, ValidationErrors> {
    Ok(GroupPayload {
        name: form.get("GroupName").trim().to_string(),
    })
}
