use crate::shared::icons::icon;
use crate::shared::master_data::paginator::PageWindow;
use leptos::prelude::*;
use thaw::*;

/// PaginationControls component - previous/next over an already clamped window
#[component]
pub fn PaginationControls(
    #[prop(into)] window: Signal<PageWindow>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                on_click=move |_| on_previous.run(())
                disabled=Signal::derive(move || window.get().is_first())
                attr:title="Previous page"
            >
                {icon("chevron-left")}
            </Button>
            <span class="pagination-info">{move || window.get().label()}</span>
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                on_click=move |_| on_next.run(())
                disabled=Signal::derive(move || window.get().is_last())
                attr:title="Next page"
            >
                {icon("chevron-right")}
            </Button>
        </div>
    }
}
