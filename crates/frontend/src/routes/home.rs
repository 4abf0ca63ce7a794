use crate::layout::left::navbar::NAV_ITEMS;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Landing page; also what unknown paths fall back to.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page" id="home--list" data-page-category="list">
            <div class="page-header">
                <h1 class="page-header__title">"Masters"</h1>
            </div>
            <div class="page__content home-grid">
                {NAV_ITEMS.iter().map(|(path, icon_name, title)| view! {
                    <A href=*path attr:class="home-card">
                        {icon(icon_name)}
                        <span class="home-card__title">{*title}</span>
                    </A>
                }).collect_view()}
            </div>
        </div>
    }
}
