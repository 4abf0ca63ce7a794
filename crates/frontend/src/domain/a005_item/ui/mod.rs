pub mod history;

use leptos::prelude::*;

use super::config::ITEM_CONFIG;
use crate::shared::master_page::MasterPage;

/// Item master. Group, make, brand and vendor selects come from the dropdown endpoint.
#[component]
pub fn ItemPage() -> impl IntoView {
    view! { <MasterPage config=&ITEM_CONFIG /> }
}
