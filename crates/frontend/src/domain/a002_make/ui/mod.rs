use leptos::prelude::*;

use super::config::MAKE_CONFIG;
use crate::shared::master_page::MasterPage;

#[component]
pub fn MakePage() -> impl IntoView {
    view! { <MasterPage config=&MAKE_CONFIG /> }
}
