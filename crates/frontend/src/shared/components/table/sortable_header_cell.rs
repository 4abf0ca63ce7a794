//! Clickable table header cell that toggles sorting on its field
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Item Name"
//!     field="itemname"
//!     indicator=Signal::derive(move || state.with(|s| s.view.sort_indicator("itemname")))
//!     on_sort=Callback::new(move |field| toggle_sort(field))
//! />
//! ```

use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    /// Column title
    label: &'static str,

    /// Wire field the column sorts by
    field: &'static str,

    /// `" ▲"`, `" ▼"` or `" ⇅"`
    #[prop(into)]
    indicator: Signal<&'static str>,

    /// Called with `field` on click
    on_sort: Callback<&'static str>,

    /// Numeric columns are right aligned
    #[prop(optional)]
    align_right: bool,
) -> impl IntoView {
    let class = if align_right {
        "resizable table__header-cell--right"
    } else {
        "resizable"
    };

    view! {
        <TableHeaderCell resizable=false class=class>
            <div class="table__sortable-header" style="cursor: pointer;" on:click=move |_| on_sort.run(field)>
                {label}
                <span class=move || {
                    if indicator.get() == " ⇅" {
                        "table__sort-icon"
                    } else {
                        "table__sort-icon table__sort-icon--active"
                    }
                }>
                    {move || indicator.get()}
                </span>
            </div>
        </TableHeaderCell>
    }
}
