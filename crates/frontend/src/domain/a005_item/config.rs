//! Item master. Unlike the other pages the form stays open after a plain
//! save, and group/make/brand/vendor are picked from lookup lists.

use contracts::domain::a005_item::aggregate::{Item, ItemPayload};

use super::ui::history::ITEM_HISTORY_TABS;
use crate::shared::master_data::form::{clean_money, parse_number};
use crate::shared::master_data::view::SortDirection;
use crate::shared::master_data::{
    AfterSave, Column, EntityConfig, FieldKind, FormField, FormValues, ValidationErrors,
};

pub const DROPDOWN_DATA_PATH: &str = "/api/items/dropdown-data";

pub static ITEM_CONFIG: EntityConfig<Item> = EntityConfig {
    base_path: "/items",
    entity_name: "Item",
    list_title: "Items",
    columns: &[
        Column::numeric("itemcode", "Item Code"),
        Column::text("groupname", "Group"),
        Column::text("makename", "Make"),
        Column::text("brandname", "Brand"),
        Column::text("itemname", "Item Name"),
        Column::amount("avgcost", "Avg Cost"),
        Column::amount("sprice", "S.Price"),
        Column::amount("mrp", "MRP"),
        Column::numeric("curstock", "Stock"),
        Column::numeric("cgst", "CGST"),
        Column::numeric("sgst", "SGST"),
        Column::text("billable", "Billable"),
    ],
    form_fields: &[
        FormField::new("GroupID", "Group", FieldKind::Select("groups")).required(),
        FormField::new("IsExpence", "Expense item", FieldKind::Checkbox),
        FormField::new("Billable", "Billable", FieldKind::Checkbox),
        FormField::new("BrandID", "Brand", FieldKind::Select("brands")).required(),
        FormField::new("MakeID", "Make", FieldKind::Select("makes")).required(),
        FormField::new("ItemCode", "Item Code", FieldKind::ReadOnly),
        FormField::new("ItemName", "Item Name", FieldKind::TextArea).required(),
        FormField::new("Packing", "Packing", FieldKind::Text),
        FormField::new("PartyID", "Vendor", FieldKind::Select("parties")),
        FormField::new("Unit", "Unit", FieldKind::Text),
        FormField::new("SuppRef", "Supp. Ref", FieldKind::Text),
        FormField::new("HSNCode", "HSN Code", FieldKind::Text).required(),
        FormField::new("PartNo", "Part No", FieldKind::Text),
        FormField::new("Model", "Model", FieldKind::Text),
        FormField::new("Barcode", "Barcode", FieldKind::Text),
        FormField::new("Shelf", "Shelf", FieldKind::Text),
        FormField::new("OpeningStock", "Opening", FieldKind::Number),
        FormField::new("CurStock", "Current", FieldKind::Number),
        FormField::new("CGST", "CGST", FieldKind::Number).required(),
        FormField::new("SGST", "SGST", FieldKind::Number).required(),
        FormField::new("IGST", "IGST", FieldKind::Number),
        FormField::new("AvgCost", "Avg. Cost", FieldKind::Number),
        FormField::new("MRP", "MRP", FieldKind::Number),
        FormField::new("Cost", "Cost", FieldKind::Number),
        FormField::new("SPrice", "Selling Price", FieldKind::Number),
    ],
    name_field: "ItemName",
    duplicate_message: "Item Name already exists",
    search_options: &[
        ("itemcode", "Item Code"),
        ("itemname", "Item Name"),
        ("groupname", "Group"),
        ("makename", "Make"),
        ("brandname", "Brand"),
    ],
    default_sort: Some(("itemname", SortDirection::Ascending)),
    after_save: AfterSave::StayOpen,
    in_use_message: "Item is used in transactions, cannot delete",
    in_use_from_server: false,
    scope: every_item,
    to_form,
    blank_form,
    to_payload,
    lookups_path: Some(DROPDOWN_DATA_PATH),
    computed: markups,
    detail_tabs: ITEM_HISTORY_TABS,
};

fn every_item(_: &Item) -> bool {
    true
}

fn opt_text(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn to_form(item: &Item) -> FormValues {
    let mut form = FormValues::new()
        .with("ItemCode", item.id.as_string())
        .with("GroupID", opt_text(item.group_id))
        .with("MakeID", opt_text(item.make_id))
        .with("BrandID", opt_text(item.brand_id))
        .with("PartyID", opt_text(item.party_id))
        .with("ItemName", item.name.clone())
        .with("Packing", item.packing.clone())
        .with("SuppRef", item.supp_ref.clone())
        .with("Barcode", item.barcode.clone())
        .with("Cost", clean_money(&item.cost))
        .with("AvgCost", clean_money(&item.avg_cost))
        .with("OpeningStock", item.opening_stock.clone())
        .with("CurStock", item.cur_stock.clone())
        .with("SPrice", clean_money(&item.sale_price))
        .with("MRP", clean_money(&item.mrp))
        .with("Unit", item.unit.clone())
        .with("Shelf", item.shelf.clone())
        .with("PartNo", item.part_no.clone())
        .with("Model", item.model.clone())
        .with("CGST", item.cgst.clone())
        .with("SGST", item.sgst.clone())
        .with("IGST", item.igst.clone())
        .with("HSNCode", item.hsn_code.clone());
    form.set_flag("IsExpence", item.is_expense);
    form.set_flag("Billable", item.billable);
    form.set_flag("Deleted", item.deleted);
    form
}

fn blank_form() -> FormValues {
    let mut form = ITEM_CONFIG
        .form_fields
        .iter()
        .fold(FormValues::new(), |form, field| form.with(field.key, ""));
    form.set_flag("IsExpence", false);
    form.set_flag("Billable", true);
    form.set_flag("Deleted", false);
    form
}

fn to_payload(form: &FormValues) -> Result<ItemPayload, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let mut id = |key: &'static str, label: &str| match form.non_empty(key) {
        None => None,
        Some(raw) => match raw.parse::<i64>() {
            Ok(v) => Some(v),
            Err(_) => {
                errors.push(key, format!("{} is invalid", label));
                None
            }
        },
    };
    let group_id = id("GroupID", "Group");
    let make_id = id("MakeID", "Make");
    let brand_id = id("BrandID", "Brand");
    let party_id = id("PartyID", "Vendor");

    let number = |key: &str| parse_number(form.get(key)).ok().flatten();
    let payload = ItemPayload {
        group_id,
        make_id,
        brand_id,
        name: form.get("ItemName").trim().to_string(),
        packing: form.non_empty("Packing"),
        supp_ref: form.non_empty("SuppRef"),
        barcode: form.non_empty("Barcode"),
        cost: number("Cost"),
        avg_cost: number("AvgCost"),
        opening_stock: number("OpeningStock"),
        cur_stock: number("CurStock"),
        sale_price: number("SPrice"),
        mrp: number("MRP"),
        unit: form.non_empty("Unit"),
        shelf: form.non_empty("Shelf"),
        part_no: form.non_empty("PartNo"),
        model: form.non_empty("Model"),
        cgst: number("CGST"),
        sgst: number("SGST"),
        igst: number("IGST"),
        hsn_code: form.non_empty("HSNCode"),
        party_id,
        is_expense: form.flag("IsExpence"),
        billable: form.flag("Billable"),
        deleted: form.flag("Deleted"),
    };
    errors.into_result().map(|_| payload)
}

/// Markup of `price` over `cost` in percent; `None` without a usable cost.
pub fn markup_percent(cost: &str, price: &str) -> Option<f64> {
    let cost = parse_number(cost).ok().flatten().filter(|c| *c != 0.0)?;
    let price = parse_number(price).ok().flatten().unwrap_or(0.0);
    Some((price - cost) / cost * 100.0)
}

fn format_percent(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}%", v))
        .unwrap_or_else(|| "-".to_string())
}

fn markups(form: &FormValues) -> Vec<(&'static str, String)> {
    let cost = form.get("Cost");
    vec![
        ("MU on MRP", format_percent(markup_percent(cost, form.get("MRP")))),
        ("MU on SP", format_percent(markup_percent(cost, form.get("SPrice")))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::MasterRecord;

    fn loaded() -> Item {
        serde_json::from_value(serde_json::json!({
            "itemcode": 110, "itemname": "Bosch Spark Plug 110mm", "groupid": 3,
            "makeid": 4, "brandid": 1, "cost": "$1,250.00", "mrp": "$1,500.00",
            "cgst": "9.00", "sgst": "9.00", "hsncode": "8511", "billable": true
        }))
        .unwrap()
    }

    #[test]
    fn test_money_is_cleaned_on_load() {
        let form = to_form(&loaded());
        assert_eq!(form.get("Cost"), "1250.00");
        assert_eq!(form.get("MRP"), "1500.00");
        assert_eq!(form.get("ItemCode"), "110");
        assert!(form.flag("Billable"));
        assert!(!form.flag("IsExpence"));
    }

    #[test]
    fn test_loaded_item_is_valid_and_converts() {
        let form = to_form(&loaded());
        assert!(ITEM_CONFIG.validate(&form).is_empty());
        let payload = to_payload(&form).unwrap();
        assert_eq!(payload.group_id, Some(3));
        assert_eq!(payload.cost, Some(1250.0));
        assert_eq!(payload.party_id, None);
        assert_eq!(payload.packing, None);
        assert!(payload.billable);
    }

    #[test]
    fn test_blank_form() {
        let form = blank_form();
        assert_eq!(form.get("ItemName"), "");
        assert!(form.flag("Billable"));
        assert!(!form.flag("Deleted"));
        let errors = ITEM_CONFIG.validate(&form);
        assert_eq!(
            errors.summary(),
            "Group is required, Brand is required, Make is required, Item Name is required, \
             HSN Code is required, CGST is required, SGST is required"
        );
    }

    #[test]
    fn test_non_numeric_select_value_is_rejected() {
        let form = to_form(&loaded()).with("GroupID", "spark");
        let errors = to_payload(&form).unwrap_err();
        assert_eq!(errors.first_field(), Some("GroupID"));
    }

    #[test]
    fn test_markups() {
        assert_eq!(markup_percent("100", "125"), Some(25.0));
        assert_eq!(markup_percent("0", "125"), None);
        assert_eq!(markup_percent("", "125"), None);
        let shown = markups(&to_form(&loaded()));
        assert_eq!(shown[0], ("MU on MRP", "20.00%".to_string()));
    }

    #[test]
    fn test_search_fields_cover_joined_names() {
        assert!(Item::search_fields().contains(&"brandname"));
    }
}
