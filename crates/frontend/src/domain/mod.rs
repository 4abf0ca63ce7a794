pub mod a001_brand;
pub mod a002_make;
pub mod a003_group;
pub mod a004_customer;
pub mod a005_item;
pub mod a006_supplier;
pub mod party_form;
