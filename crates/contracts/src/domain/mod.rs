pub mod a001_brand;
pub mod a002_make;
pub mod a003_group;
pub mod a004_party;
pub mod a005_item;
pub mod common;
