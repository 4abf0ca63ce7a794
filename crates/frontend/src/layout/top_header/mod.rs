//! TopHeader component - application top navigation bar.

use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader(left_open: RwSignal<bool>) -> impl IntoView {
    let toggle_sidebar = move |_| left_open.update(|open| *open = !*open);

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if left_open.get() {
                        icon("chevron-left")
                    } else {
                        icon("chevron-right")
                    }}
                </button>
                <span class="top-header__title">"Master Data"</span>
            </div>
        </div>
    }
}
