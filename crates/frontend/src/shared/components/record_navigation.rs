use crate::shared::icons::icon;
use crate::shared::master_data::navigator::RecordNavigator;
use leptos::prelude::*;
use thaw::*;

/// Previous/next stepping through the filtered list while a record is open.
///
/// Renders nothing unless the open record sits in a view of two or more.
#[component]
pub fn RecordNavigation(
    /// `None` outside Edit mode
    #[prop(into)]
    navigator: Signal<Option<RecordNavigator>>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    let no_previous = Signal::derive(move || {
        navigator.with(|n| n.as_ref().and_then(RecordNavigator::previous_id).is_none())
    });
    let no_next = Signal::derive(move || {
        navigator.with(|n| n.as_ref().and_then(RecordNavigator::next_id).is_none())
    });

    view! {
        <Show when=move || navigator.with(|n| n.as_ref().is_some_and(RecordNavigator::is_visible))>
            <div class="record-nav">
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| on_previous.run(())
                    disabled=no_previous
                    attr:title="Previous record"
                >
                    {icon("chevron-left")}
                </Button>
                <span class="record-nav__label">{move || navigator.with(|n| n.as_ref().map(RecordNavigator::label))}</span>
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| on_next.run(())
                    disabled=no_next
                    attr:title="Next record"
                >
                    {icon("chevron-right")}
                </Button>
            </div>
        </Show>
    }
}
