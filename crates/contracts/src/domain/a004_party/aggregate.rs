use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::common::{loose, MasterRecord, RecordId, SortKind};

/// Party type code for customers in `tblMasParty`.
pub const PARTY_TYPE_CUSTOMER: i64 = 1;
/// Party type code for suppliers in `tblMasParty`.
pub const PARTY_TYPE_SUPPLIER: i64 = 2;

// ============================================================================
// Record
// ============================================================================

/// Контрагент: customers and suppliers share one table, told apart by `partytype`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Party {
    #[serde(rename = "partyid")]
    pub id: RecordId,

    #[serde(rename = "partycode", default, deserialize_with = "loose::string")]
    pub code: String,

    #[serde(rename = "partytype", default, deserialize_with = "loose::opt_i64")]
    pub party_type: Option<i64>,

    #[serde(rename = "partyname", default, deserialize_with = "loose::string")]
    pub name: String,

    #[serde(rename = "contactno", default, deserialize_with = "loose::string")]
    pub contact_no: String,

    #[serde(default, deserialize_with = "loose::string")]
    pub address1: String,

    #[serde(default, deserialize_with = "loose::string")]
    pub address2: String,

    #[serde(rename = "accountid", default, deserialize_with = "loose::opt_i64")]
    pub account_id: Option<i64>,

    #[serde(rename = "gstnum", default, deserialize_with = "loose::string")]
    pub gst_num: String,

    /// Joined from `acc_mas_account`
    #[serde(default, deserialize_with = "loose::string")]
    pub account_name: String,
}

impl Party {
    pub fn is_customer(&self) -> bool {
        self.party_type == Some(PARTY_TYPE_CUSTOMER)
    }

    pub fn is_supplier(&self) -> bool {
        self.party_type == Some(PARTY_TYPE_SUPPLIER)
    }
}

impl MasterRecord for Party {
    type Payload = PartyPayload;

    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "partyid" => Some(self.id.as_string()),
            "partycode" => Some(self.code.clone()),
            "partytype" => self.party_type.map(|t| t.to_string()),
            "partyname" => Some(self.name.clone()),
            "contactno" => Some(self.contact_no.clone()),
            "address1" => Some(self.address1.clone()),
            "address2" => Some(self.address2.clone()),
            "accountid" => self.account_id.map(|a| a.to_string()),
            "gstnum" => Some(self.gst_num.clone()),
            "account_name" => Some(self.account_name.clone()),
            _ => None,
        }
    }

    fn search_fields() -> &'static [&'static str] {
        &["partyid", "partyname"]
    }

    fn sort_kind(field: &str) -> SortKind {
        match field {
            "partyid" | "accountid" => SortKind::Numeric,
            _ => SortKind::Text,
        }
    }

    fn created_id(ack: &Value) -> Option<RecordId> {
        ack.get("party")
            .and_then(|p| p.get("partyid"))
            .and_then(loose::id_from_value)
    }

    fn collection_name() -> &'static str {
        "party"
    }

    fn element_name() -> &'static str {
        "Party"
    }

    fn list_name() -> &'static str {
        "Parties"
    }
}

// ============================================================================
// Payload
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartyPayload {
    #[serde(rename = "PartyType")]
    pub party_type: i64,

    #[serde(rename = "PartyName")]
    pub name: String,

    #[serde(rename = "ContactNo")]
    pub contact_no: Option<String>,

    #[serde(rename = "Address1")]
    pub address1: Option<String>,

    #[serde(rename = "Address2")]
    pub address2: Option<String>,

    #[serde(rename = "AccountID")]
    pub account_id: Option<i64>,

    #[serde(rename = "GSTNum")]
    pub gst_num: Option<String>,
}
