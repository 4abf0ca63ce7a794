//! PageFrame: standard root wrapper for every master-data page.
//!
//! Puts two metadata attributes on the root DOM element:
//!   - `id`                   `"{entity}--{category}"`, e.g. `"items--detail"`
//!   - `data-page-category`   [`PAGE_CAT_LIST`] or [`PAGE_CAT_DETAIL`]

use leptos::prelude::*;

/// Table with search and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// New/Edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

pub fn page_id(entity: &str, category: &str) -> String {
    format!("{entity}--{category}")
}

#[component]
pub fn PageFrame(
    /// Collection name, e.g. `"brand"`
    entity: &'static str,
    #[prop(into)] category: Signal<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=move || page_id(entity, category.get())
            class=move || if category.get() == PAGE_CAT_DETAIL { "page page--detail" } else { "page" }
            data-page-category=move || category.get()
        >
            {children()}
        </div>
    }
}
