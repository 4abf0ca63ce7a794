use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::common::{loose, MasterRecord, RecordId, SortKind};

// ============================================================================
// Record
// ============================================================================

/// Номенклатура (item master row) with its group/make/brand names joined in.
///
/// Money and tax columns are kept as the text the backend sent (`"$1,250.00"`,
/// `"9.00"`); the list formats them and the form cleans them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    #[serde(rename = "itemcode")]
    pub id: RecordId,

    #[serde(rename = "itemname", default, deserialize_with = "loose::string")]
    pub name: String,

    #[serde(rename = "groupid", default, deserialize_with = "loose::opt_i64")]
    pub group_id: Option<i64>,
    #[serde(rename = "makeid", default, deserialize_with = "loose::opt_i64")]
    pub make_id: Option<i64>,
    #[serde(rename = "brandid", default, deserialize_with = "loose::opt_i64")]
    pub brand_id: Option<i64>,
    #[serde(rename = "partyid", default, deserialize_with = "loose::opt_i64")]
    pub party_id: Option<i64>,

    #[serde(rename = "groupname", default, deserialize_with = "loose::string")]
    pub group_name: String,
    #[serde(rename = "makename", default, deserialize_with = "loose::string")]
    pub make_name: String,
    #[serde(rename = "brandname", default, deserialize_with = "loose::string")]
    pub brand_name: String,

    #[serde(default, deserialize_with = "loose::string")]
    pub packing: String,
    #[serde(rename = "suppref", default, deserialize_with = "loose::string")]
    pub supp_ref: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub barcode: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub unit: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub shelf: String,
    #[serde(rename = "partno", default, deserialize_with = "loose::string")]
    pub part_no: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub model: String,
    #[serde(rename = "hsncode", default, deserialize_with = "loose::string")]
    pub hsn_code: String,

    #[serde(default, deserialize_with = "loose::string")]
    pub cost: String,
    #[serde(rename = "avgcost", default, deserialize_with = "loose::string")]
    pub avg_cost: String,
    #[serde(rename = "opening_stock", default, deserialize_with = "loose::string")]
    pub opening_stock: String,
    #[serde(rename = "curstock", default, deserialize_with = "loose::string")]
    pub cur_stock: String,
    #[serde(rename = "sprice", default, deserialize_with = "loose::string")]
    pub sale_price: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub mrp: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub cgst: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub sgst: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub igst: String,

    #[serde(rename = "isexpence", default, deserialize_with = "loose::flag")]
    pub is_expense: bool,
    #[serde(default, deserialize_with = "loose::flag")]
    pub billable: bool,
    #[serde(default, deserialize_with = "loose::flag")]
    pub deleted: bool,
}

impl MasterRecord for Item {
    type Payload = ItemPayload;

    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn field_text(&self, field: &str) -> Option<String> {
        let opt = |v: Option<i64>| v.map(|n| n.to_string());
        let text = match field {
            "itemcode" => self.id.as_string(),
            "itemname" => self.name.clone(),
            "groupid" => return opt(self.group_id),
            "makeid" => return opt(self.make_id),
            "brandid" => return opt(self.brand_id),
            "partyid" => return opt(self.party_id),
            "groupname" => self.group_name.clone(),
            "makename" => self.make_name.clone(),
            "brandname" => self.brand_name.clone(),
            "packing" => self.packing.clone(),
            "suppref" => self.supp_ref.clone(),
            "barcode" => self.barcode.clone(),
            "unit" => self.unit.clone(),
            "shelf" => self.shelf.clone(),
            "partno" => self.part_no.clone(),
            "model" => self.model.clone(),
            "hsncode" => self.hsn_code.clone(),
            "cost" => self.cost.clone(),
            "avgcost" => self.avg_cost.clone(),
            "opening_stock" => self.opening_stock.clone(),
            "curstock" => self.cur_stock.clone(),
            "sprice" => self.sale_price.clone(),
            "mrp" => self.mrp.clone(),
            "cgst" => self.cgst.clone(),
            "sgst" => self.sgst.clone(),
            "igst" => self.igst.clone(),
            "isexpence" => self.is_expense.to_string(),
            "billable" => self.billable.to_string(),
            "deleted" => self.deleted.to_string(),
            _ => return None,
        };
        Some(text)
    }

    fn search_fields() -> &'static [&'static str] {
        &["itemcode", "itemname", "groupname", "makename", "brandname"]
    }

    fn sort_kind(field: &str) -> SortKind {
        match field {
            "itemcode" | "cost" | "avgcost" | "opening_stock" | "curstock" | "sprice" | "mrp"
            | "cgst" | "sgst" | "igst" => SortKind::Numeric,
            _ => SortKind::Text,
        }
    }

    fn created_id(ack: &Value) -> Option<RecordId> {
        ack.get("itemCode")
            .or_else(|| ack.get("itemcode"))
            .and_then(loose::id_from_value)
    }

    fn collection_name() -> &'static str {
        "items"
    }

    fn element_name() -> &'static str {
        "Item"
    }

    fn list_name() -> &'static str {
        "Items"
    }
}

// ============================================================================
// Payload
// ============================================================================

/// Empty text fields travel as `null`, numeric fields as numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ItemPayload {
    #[serde(rename = "GroupID")]
    pub group_id: Option<i64>,
    #[serde(rename = "MakeID")]
    pub make_id: Option<i64>,
    #[serde(rename = "BrandID")]
    pub brand_id: Option<i64>,
    #[serde(rename = "ItemName")]
    pub name: String,
    #[serde(rename = "Packing")]
    pub packing: Option<String>,
    #[serde(rename = "SuppRef")]
    pub supp_ref: Option<String>,
    #[serde(rename = "Barcode")]
    pub barcode: Option<String>,
    #[serde(rename = "Cost")]
    pub cost: Option<f64>,
    #[serde(rename = "AvgCost")]
    pub avg_cost: Option<f64>,
    #[serde(rename = "OpeningStock")]
    pub opening_stock: Option<f64>,
    #[serde(rename = "CurStock")]
    pub cur_stock: Option<f64>,
    #[serde(rename = "SPrice")]
    pub sale_price: Option<f64>,
    #[serde(rename = "MRP")]
    pub mrp: Option<f64>,
    #[serde(rename = "Unit")]
    pub unit: Option<String>,
    #[serde(rename = "Shelf")]
    pub shelf: Option<String>,
    #[serde(rename = "PartNo")]
    pub part_no: Option<String>,
    #[serde(rename = "Model")]
    pub model: Option<String>,
    #[serde(rename = "CGST")]
    pub cgst: Option<f64>,
    #[serde(rename = "SGST")]
    pub sgst: Option<f64>,
    #[serde(rename = "IGST")]
    pub igst: Option<f64>,
    #[serde(rename = "HSNCode")]
    pub hsn_code: Option<String>,
    #[serde(rename = "PartyID")]
    pub party_id: Option<i64>,
    #[serde(rename = "IsExpence")]
    pub is_expense: bool,
    #[serde(rename = "Billable")]
    pub billable: bool,
    #[serde(rename = "Deleted")]
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: &str = r#"{
        "itemcode": 110, "itemname": "Bosch Spark Plug 110mm",
        "groupid": 3, "makeid": "4", "brandid": 1, "partyid": null,
        "groupname": "Spark Plugs", "makename": "Maruti", "brandname": "Bosch",
        "cost": "$1,250.00", "mrp": 1499.5, "cgst": "9.00", "sgst": "9.00",
        "hsncode": "8511", "isexpence": false, "billable": true, "deleted": null
    }"#;

    #[test]
    fn test_item_row_mapping() {
        let item: Item = serde_json::from_str(ROW).unwrap();
        assert_eq!(item.id, RecordId(110));
        assert_eq!(item.make_id, Some(4));
        assert_eq!(item.party_id, None);
        assert_eq!(item.cost, "$1,250.00");
        assert_eq!(item.mrp, "1499.5");
        assert!(item.billable);
        assert!(!item.deleted);
        assert_eq!(item.field_text("brandname").as_deref(), Some("Bosch"));
        assert_eq!(item.field_text("nosuchfield"), None);
    }

    #[test]
    fn test_payload_wire_names() {
        let payload = ItemPayload {
            name: "Bosch Filter".into(),
            hsn_code: Some("8421".into()),
            cgst: Some(9.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["ItemName"], "Bosch Filter");
        assert_eq!(json["HSNCode"], "8421");
        assert_eq!(json["CGST"], 9.0);
        assert!(json["Packing"].is_null());
        assert!(json.get("ItemCode").is_none());
    }

    #[test]
    fn test_created_id_from_item_code() {
        let ack = serde_json::json!({"message": "Item added successfully", "itemCode": 512});
        assert_eq!(Item::created_id(&ack), Some(RecordId(512)));
    }
}
