use leptos::prelude::*;

use super::config::CUSTOMER_CONFIG;
use crate::shared::master_page::MasterPage;

/// Parties of type customer only; suppliers never show up here.
#[component]
pub fn CustomerPage() -> impl IntoView {
    view! { <MasterPage config=&CUSTOMER_CONFIG /> }
}
