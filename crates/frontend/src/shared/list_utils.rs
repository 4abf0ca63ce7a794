//! Search box for list pages: debounced text input, scope select, clear button.
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use thaw::Select;

use crate::shared::master_data::SearchScope;

/// Keystrokes inside this window collapse into one search
const DEBOUNCE_MS: u32 = 300;

/// Scope select value for "every searchable field"
const ALL_FIELDS: &str = "";

fn scope_value(scope: SearchScope) -> &'static str {
    match scope {
        SearchScope::AllFields => ALL_FIELDS,
        SearchScope::Field(field) => field,
    }
}

fn scope_from_value(options: &[(&'static str, &'static str)], value: &str) -> SearchScope {
    options
        .iter()
        .find(|(field, _)| *field == value)
        .map(|(field, _)| SearchScope::Field(*field))
        .unwrap_or(SearchScope::AllFields)
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// `(field, label)` pairs offered besides "All Fields"
    #[prop(optional)]
    scope_options: &'static [(&'static str, &'static str)],
    #[prop(into)]
    scope: Signal<SearchScope>,
    #[prop(into)]
    on_scope_change: Callback<SearchScope>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    let debounce = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // dropping the previous timeout cancels it
        debounce.set_value(Some(Timeout::new(DEBOUNCE_MS, move || {
            on_change.run(new_value);
        })));
    };

    let clear_filter = move |_| {
        debounce.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    // Select value <-> SearchScope
    let scope_choice = RwSignal::new(scope_value(scope.get_untracked()).to_string());
    Effect::new(move |_| {
        let current = scope_value(scope.get());
        if scope_choice.with_untracked(|c| c != current) {
            scope_choice.set(current.to_string());
        }
    });
    Effect::new(move |_| {
        let chosen = scope_from_value(scope_options, &scope_choice.get());
        if scope.get_untracked() != chosen {
            on_scope_change.run(chosen);
        }
    });

    view! {
        <div class="search-input">
            {(!scope_options.is_empty()).then(|| view! {
                <Select value=scope_choice class="search-input__scope">
                    <option value=ALL_FIELDS>"All Fields"</option>
                    {scope_options.iter().map(|(field, label)| view! {
                        <option value=*field>{*label}</option>
                    }).collect_view()}
                </Select>
            })}
            <input
                type="text"
                placeholder=placeholder
                class=move || if is_filter_active() {
                    "search-input__field search-input__field--active"
                } else {
                    "search-input__field"
                }
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}
