use contracts::domain::a004_party::aggregate::{Party, PartyPayload, PARTY_TYPE_CUSTOMER};

use crate::domain::party_form::{self, DUPLICATE_PARTY, PARTY_COLUMNS, PARTY_FIELDS, PARTY_SEARCH};
use crate::shared::master_data::config::no_computed;
use crate::shared::master_data::{AfterSave, EntityConfig, FormValues, ValidationErrors};

/// New customers post to the sundry debtors account.
const DEFAULT_ACCOUNT: &str = "5";

pub static CUSTOMER_CONFIG: EntityConfig<Party> = EntityConfig {
    base_path: "/customers",
    entity_name: "Customer",
    list_title: "Customers",
    columns: PARTY_COLUMNS,
    form_fields: PARTY_FIELDS,
    name_field: "PartyName",
    duplicate_message: DUPLICATE_PARTY,
    search_options: PARTY_SEARCH,
    default_sort: None,
    after_save: AfterSave::ReturnToList,
    in_use_message: "Customer has transactions, cannot delete",
    in_use_from_server: true,
    scope: Party::is_customer,
    to_form,
    blank_form,
    to_payload,
    lookups_path: None,
    computed: no_computed,
    detail_tabs: &[],
};

fn to_form(party: &Party) -> FormValues {
    party_form::to_form(party, PARTY_TYPE_CUSTOMER, DEFAULT_ACCOUNT)
}

fn blank_form() -> FormValues {
    party_form::blank_form(PARTY_TYPE_CUSTOMER, DEFAULT_ACCOUNT)
}

fn to_payload(form: &FormValues) -> Result<PartyPayload, ValidationErrors> {
    party_form::to_payload(form, PARTY_TYPE_CUSTOMER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::master_data::error::ApiError;
    use crate::shared::master_data::gateway::RemoveOutcome;
    use crate::shared::master_data::testing::Harness;
    use crate::shared::master_data::toast::ToastKind;
    use contracts::domain::common::RecordId;
    use futures::executor::block_on;

    fn parties() -> Vec<Party> {
        serde_json::from_value(serde_json::json!([
            {"partyid": 1, "partytype": 1, "partyname": "Ravi Motors"},
            {"partyid": 2, "partytype": 2, "partyname": "Lakshmi Traders"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_delete_in_use_shows_server_explanation() {
        let page = Harness::mount(&CUSTOMER_CONFIG, parties());
        let explanation = "Cannot delete this party. It is currently used in 3 transactions across the system.";
        page.api.backend().fail_remove = Some(ApiError::InUse {
            message: Some(explanation.to_string()),
        });

        let outcome = block_on(page.gateway.remove(RecordId(1), &|_: &str| true));
        assert_eq!(outcome, RemoveOutcome::Failed);
        assert_eq!(
            page.toasts.last(),
            Some((explanation.to_string(), ToastKind::Error))
        );
    }

    #[test]
    fn test_delete_in_use_without_body_falls_back() {
        let page = Harness::mount(&CUSTOMER_CONFIG, parties());
        page.api.backend().fail_remove = Some(ApiError::InUse {
            message: Some("  ".to_string()),
        });

        block_on(page.gateway.remove(RecordId(1), &|_: &str| true));
        assert_eq!(
            page.toasts.last().map(|t| t.0),
            Some(CUSTOMER_CONFIG.in_use_message.to_string())
        );
    }
}
