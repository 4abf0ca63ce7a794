use contracts::domain::a004_party::aggregate::{Party, PartyPayload, PARTY_TYPE_SUPPLIER};

use crate::domain::party_form::{self, DUPLICATE_PARTY, PARTY_COLUMNS, PARTY_FIELDS, PARTY_SEARCH};
use crate::shared::master_data::config::no_computed;
use crate::shared::master_data::{AfterSave, EntityConfig, FormValues, ValidationErrors};

pub static SUPPLIER_CONFIG: EntityConfig<Party> = EntityConfig {
    base_path: "/suppliers",
    entity_name: "Supplier",
    list_title: "Suppliers",
    columns: PARTY_COLUMNS,
    form_fields: PARTY_FIELDS,
    name_field: "PartyName",
    duplicate_message: DUPLICATE_PARTY,
    search_options: PARTY_SEARCH,
    default_sort: None,
    after_save: AfterSave::ReturnToList,
    in_use_message: "Supplier has transactions, cannot delete",
    in_use_from_server: true,
    scope: Party::is_supplier,
    to_form,
    blank_form,
    to_payload,
    lookups_path: None,
    computed: no_computed,
    detail_tabs: &[],
};

fn to_form(party: &Party) -> FormValues {
    party_form::to_form(party, PARTY_TYPE_SUPPLIER, "")
}

fn blank_form() -> FormValues {
    party_form::blank_form(PARTY_TYPE_SUPPLIER, "")
}

fn to_payload(form: &FormValues) -> Result<PartyPayload, ValidationErrors> {
    party_form::to_payload(form, PARTY_TYPE_SUPPLIER)
}
