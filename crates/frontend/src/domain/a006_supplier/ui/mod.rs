use leptos::prelude::*;

use super::config::SUPPLIER_CONFIG;
use crate::shared::master_page::MasterPage;

#[component]
pub fn SupplierPage() -> impl IntoView {
    view! { <MasterPage config=&SUPPLIER_CONFIG /> }
}
