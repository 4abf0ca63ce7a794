pub mod page_header;
pub mod pagination_controls;
pub mod record_navigation;
pub mod table;
pub mod toast_host;
