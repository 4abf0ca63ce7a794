pub mod api_utils;
pub mod components;
pub mod icons;
pub mod list_utils;
pub mod master_data;
pub mod master_page;
pub mod page_frame;
pub mod toast_service;
