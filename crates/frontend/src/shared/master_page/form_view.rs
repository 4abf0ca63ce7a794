use contracts::domain::common::MasterRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{browser_confirm, field_dom_id, PageContext};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::record_navigation::RecordNavigation;
use crate::shared::icons::icon;
use crate::shared::master_data::{FieldKind, FormField, Mode, PageState, SaveAction};
use thaw::*;

const DETAILS_TAB: &str = "details";

#[component]
pub fn FormView<R: MasterRecord>(ctx: PageContext<R>) -> impl IntoView {
    let PageContext {
        config,
        state,
        gateway,
        mode,
        ..
    } = ctx.clone();
    let router = ctx.router();
    let navigator = ctx.navigator();

    let title = Signal::derive(move || {
        let target = mode.get();
        state.with(|s| config.form_title(target, &s.form.values))
    });
    let is_open = move || state.with(|s| s.form.open_for.is_some());
    let can_save = move || state.with(|s| s.can_save(config));
    let is_dirty = move || state.with(|s| s.form.open_for.is_some() && s.is_dirty(config));

    // DETAILS_TAB or a detail tab label; back to details whenever the record changes
    let selected_tab = RwSignal::new(DETAILS_TAB.to_string());
    Effect::new(move |_| {
        mode.track();
        selected_tab.set(DETAILS_TAB.to_string());
    });
    let has_tabs = move || !config.detail_tabs.is_empty() && matches!(mode.get(), Mode::Edit(_));
    let on_details = move || !has_tabs() || selected_tab.with(|t| t == DETAILS_TAB);
    let detail_panel = move || {
        let Mode::Edit(id) = mode.get() else {
            return None;
        };
        selected_tab.with(|label| {
            config
                .detail_tabs
                .iter()
                .find(|tab| tab.label == label.as_str())
                .map(|tab| (tab.render)(id))
        })
    };

    let save = {
        let gateway = gateway.clone();
        move |action: SaveAction| {
            let gateway = gateway.clone();
            spawn_local(async move {
                if let Err(e) = gateway.save(action).await {
                    log::debug!("{}: save rejected: {}", R::collection_name(), e);
                }
            });
        }
    };
    let save_and_add = save.clone();

    let remove = {
        let gateway = gateway.clone();
        move |_: leptos::ev::MouseEvent| {
            let Mode::Edit(id) = mode.get_untracked() else {
                return;
            };
            let gateway = gateway.clone();
            spawn_local(async move {
                gateway.remove(id, &browser_confirm).await;
            });
        }
    };

    let back_router = router.clone();
    let prev_router = router.clone();
    let next_router = router;
    let on_previous = Callback::new(move |_: ()| {
        if let Some(nav) = navigator.get_untracked() {
            nav.go_previous(&prev_router);
        }
    });
    let on_next = Callback::new(move |_: ()| {
        if let Some(nav) = navigator.get_untracked() {
            nav.go_next(&next_router);
        }
    });

    let fields = config
        .form_fields
        .iter()
        .map(|field| field_view(state, field))
        .collect_view();

    let computed = move || {
        state.with(|s| (config.computed)(&s.form.values))
            .into_iter()
            .map(|(label, value)| {
                view! {
                    <div class="form__computed">
                        <span class="form__computed-label">{label}</span>
                        <span class="form__computed-value">{value}</span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <PageHeader title=title>
            <RecordNavigation navigator=navigator on_previous=on_previous on_next=on_next />
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| back_router.go_to_list()>
                {icon("chevron-left")}
                " Back to list"
            </Button>
            <Show when=move || matches!(mode.get(), Mode::Edit(_))>
                <Button
                    appearance=ButtonAppearance::Transparent
                    disabled=Signal::derive(move || state.with(|s| s.pending))
                    on_click=remove.clone()
                    attr:class="form__delete-btn"
                >
                    {icon("delete")}
                    " Delete"
                </Button>
            </Show>
            <Show when=move || mode.get() == Mode::New>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || !can_save())
                    on_click={
                        let save = save_and_add.clone();
                        move |_| save(SaveAction::SaveAndAddAnother)
                    }
                >
                    {icon("plus")}
                    " Save & Add Another"
                </Button>
            </Show>
            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || !can_save())
                on_click=move |_| save(SaveAction::Save)
            >
                {icon("save")}
                {move || if state.with(|s| s.pending) { " Saving..." } else { " Save" }}
            </Button>
        </PageHeader>

        <div class="page__content">
            <Show when=has_tabs>
                <TabList selected_value=selected_tab>
                    <Tab value=DETAILS_TAB>{format!("{} Details", config.entity_name)}</Tab>
                    {config
                        .detail_tabs
                        .iter()
                        .map(|tab| view! { <Tab value=tab.label>{tab.label}</Tab> })
                        .collect_view()}
                </TabList>
            </Show>
            <Show
                when=is_open
                fallback=|| view! {
                    <div class="form__loading">
                        <Spinner />
                        "Loading..."
                    </div>
                }
            >
                <Show when=is_dirty>
                    <div class="form__dirty">"Unsaved changes"</div>
                </Show>
            </Show>
            <div class=move || if is_open() && on_details() { "form" } else { "form form--hidden" }>
                <div class="form__grid">{fields}</div>
                <div class="form__computed-list">{computed}</div>
            </div>
            {detail_panel}
        </div>
    }
}

/// Thaw inputs own an `RwSignal`; keep it and the form value in step.
fn bind_text<R: MasterRecord>(state: RwSignal<PageState<R>>, key: &'static str) -> RwSignal<String> {
    let local = RwSignal::new(state.with_untracked(|s| s.form.values.get(key).to_string()));
    Effect::new(move |_| {
        let current = state.with(|s| s.form.values.get(key).to_string());
        if local.with_untracked(|v| *v != current) {
            local.set(current);
        }
    });
    Effect::new(move |_| {
        let typed = local.get();
        if state.with_untracked(|s| s.form.values.get(key) != typed) {
            state.update(|s| s.form.set_field(key, typed));
        }
    });
    local
}

fn bind_flag<R: MasterRecord>(state: RwSignal<PageState<R>>, key: &'static str) -> RwSignal<bool> {
    let local = RwSignal::new(state.with_untracked(|s| s.form.values.flag(key)));
    Effect::new(move |_| {
        let current = state.with(|s| s.form.values.flag(key));
        if local.get_untracked() != current {
            local.set(current);
        }
    });
    Effect::new(move |_| {
        let on = local.get();
        if state.with_untracked(|s| s.form.values.flag(key) != on) {
            state.update(|s| s.form.values.set_flag(key, on));
        }
    });
    local
}

fn field_view<R: MasterRecord>(state: RwSignal<PageState<R>>, field: &'static FormField) -> AnyView {
    let key = field.key;
    let dom_id = field_dom_id(key);
    let error = move || state.with(|s| s.form.errors.message(key).map(str::to_string));
    let control_class = move || {
        if error().is_some() {
            "form__control form__control--error"
        } else {
            "form__control"
        }
    };
    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.to_string()
    };

    let input = match field.kind {
        FieldKind::ReadOnly => {
            let value = bind_text(state, key);
            view! { <Input id=dom_id value=value readonly=true attr:style="width: 100%;" /> }.into_any()
        }
        FieldKind::Text => {
            let value = bind_text(state, key);
            view! { <Input id=dom_id value=value attr:style="width: 100%;" /> }.into_any()
        }
        FieldKind::Number => {
            let value = bind_text(state, key);
            view! {
                <Input id=dom_id value=value attr:inputmode="decimal" attr:style="width: 100%;" />
            }
            .into_any()
        }
        FieldKind::TextArea => {
            let value = bind_text(state, key);
            view! { <Textarea id=dom_id value=value attr:rows=3 /> }.into_any()
        }
        FieldKind::Checkbox => {
            let checked = bind_flag(state, key);
            view! { <Checkbox attr:id=dom_id checked=checked /> }.into_any()
        }
        FieldKind::Select(set_name) => {
            let value = bind_text(state, key);
            let options = move || {
                let current = value.get();
                state
                    .with(|s| s.lookups.options(set_name).to_vec())
                    .into_iter()
                    .map(|option| {
                        let selected = option.value == current;
                        view! {
                            <option value=option.value selected=selected>{option.label}</option>
                        }
                    })
                    .collect_view()
            };
            view! {
                <Select id=dom_id value=value>
                    <option value="">{format!("Select {}", field.label)}</option>
                    {options}
                </Select>
            }
            .into_any()
        }
    };

    view! {
        <div class="form__group">
            <label class="form__label" for=field_dom_id(key)>{label}</label>
            <div class=control_class>{input}</div>
            {move || error().map(|message| view! { <div class="form__error">{message}</div> })}
        </div>
    }
    .into_any()
}
