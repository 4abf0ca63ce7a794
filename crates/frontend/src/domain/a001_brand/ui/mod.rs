use leptos::prelude::*;

use super::config::BRAND_CONFIG;
use crate::shared::master_page::MasterPage;

/// `/brands`, `/brands/new`, `/brands/edit/:id`
#[component]
pub fn BrandPage() -> impl IntoView {
    view! { <MasterPage config=&BRAND_CONFIG /> }
}
