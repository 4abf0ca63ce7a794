//! Form adapters shared by customers and suppliers (one `party` table).

use contracts::domain::a004_party::aggregate::{Party, PartyPayload};

use crate::shared::master_data::{Column, FieldKind, FormField, FormValues, ValidationErrors};

pub const PARTY_COLUMNS: &[Column] = &[
    Column::numeric("partyid", "ID"),
    Column::text("partyname", "Name"),
    Column::text("contactno", "Contact No"),
    Column::text("address1", "Address"),
    Column::text("gstnum", "GST No"),
    Column::text("account_name", "Account"),
];

pub const PARTY_FIELDS: &[FormField] = &[
    FormField::new("PartyID", "Party ID", FieldKind::ReadOnly),
    FormField::new("PartyName", "Party Name", FieldKind::Text).required(),
    FormField::new("ContactNo", "Contact No", FieldKind::Text),
    FormField::new("Address1", "Address 1", FieldKind::Text),
    FormField::new("Address2", "Address 2", FieldKind::Text),
    FormField::new("AccountID", "Account ID", FieldKind::Number),
    FormField::new("GSTNum", "GST Number", FieldKind::Text),
];

pub const PARTY_SEARCH: &[(&str, &str)] = &[("partyid", "ID"), ("partyname", "Name")];

pub const DUPLICATE_PARTY: &str = "Party with same name already exists!";

pub fn to_form(party: &Party, default_type: i64, default_account: &str) -> FormValues {
    FormValues::new()
        .with("PartyID", party.id.as_string())
        .with(
            "PartyType",
            party.party_type.unwrap_or(default_type).to_string(),
        )
        .with("PartyName", party.name.clone())
        .with("ContactNo", party.contact_no.clone())
        .with("Address1", party.address1.clone())
        .with("Address2", party.address2.clone())
        .with(
            "AccountID",
            party
                .account_id
                .map(|a| a.to_string())
                .unwrap_or_else(|| default_account.to_string()),
        )
        .with("GSTNum", party.gst_num.clone())
}

pub fn blank_form(party_type: i64, default_account: &str) -> FormValues {
    FormValues::new()
        .with("PartyID", "")
        .with("PartyType", party_type.to_string())
        .with("PartyName", "")
        .with("ContactNo", "")
        .with("Address1", "")
        .with("Address2", "")
        .with("AccountID", default_account)
        .with("GSTNum", "")
}

/// The page's own party type always wins over whatever the form holds.
pub fn to_payload(form: &FormValues, party_type: i64) -> Result<PartyPayload, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let account_id = match form.non_empty("AccountID") {
        None => None,
        Some(raw) => match raw.parse::<i64>() {
            Ok(v) => Some(v),
            Err(_) => {
                errors.push("AccountID", "Account ID must be a whole number");
                None
            }
        },
    };
    let payload = PartyPayload {
        party_type,
        name: form.get("PartyName").trim().to_string(),
        contact_no: form.non_empty("ContactNo"),
        address1: form.non_empty("Address1"),
        address2: form.non_empty("Address2"),
        account_id,
        gst_num: form.non_empty("GSTNum"),
    };
    errors.into_result().map(|_| payload)
}
