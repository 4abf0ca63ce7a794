use leptos::prelude::*;

use super::config::GROUP_CONFIG;
use crate::shared::master_page::MasterPage;

#[component]
pub fn GroupPage() -> impl IntoView {
    view! { <MasterPage config=&GROUP_CONFIG /> }
}
