//! The one List/New/Edit page every master-data entity mounts.
//!
//! The mode comes from the URL on every render; the page state only ever
//! follows it. A record page is `<MasterPage config=&BRAND_CONFIG />`.

mod form_view;
mod list_view;

use contracts::domain::common::MasterRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::shared::api_utils::api_base;
use crate::shared::master_data::api::HttpRecordApi;
use crate::shared::master_data::navigator::RecordNavigator;
use crate::shared::master_data::paginator::{paginate, PageWindow};
use crate::shared::master_data::state::SyncPlan;
use crate::shared::master_data::{
    mode, AppConfig, EntityConfig, Mode, ModeRouter, MutationGateway, Navigate, PageState,
};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL, PAGE_CAT_LIST};
use crate::shared::toast_service::{use_toasts, ToastService};

use form_view::FormView;
use list_view::ListView;

/// Navigation requests are parked here and carried out by an effect, so
/// async work never holds the router.
#[derive(Clone, Copy)]
pub struct RouteNavigator(RwSignal<Option<String>>);

impl RouteNavigator {
    /// Must run inside the `<Router>`.
    pub fn install() -> Self {
        let pending = RwSignal::new(None::<String>);
        let navigate = use_navigate();
        Effect::new(move |_| {
            if let Some(path) = pending.get() {
                pending.set(None);
                navigate(&path, NavigateOptions::default());
            }
        });
        Self(pending)
    }
}

impl Navigate for RouteNavigator {
    fn navigate(&self, path: &str) {
        self.0.try_set(Some(path.to_string()));
    }
}

/// `window.confirm`; no window means no consent.
pub fn browser_confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub type PageGateway<R> =
    MutationGateway<R, HttpRecordApi<R>, RwSignal<PageState<R>>, RouteNavigator, ToastService>;

/// Everything the list and form halves of a page share.
pub struct PageContext<R: MasterRecord> {
    pub config: &'static EntityConfig<R>,
    pub state: RwSignal<PageState<R>>,
    pub gateway: PageGateway<R>,
    pub mode: Memo<Mode>,
    /// The single ordered view behind the table, the pager and the navigator
    pub ordered: Memo<Vec<R>>,
    pub window: Memo<PageWindow>,
}

impl<R: MasterRecord> Clone for PageContext<R> {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            state: self.state,
            gateway: self.gateway.clone(),
            mode: self.mode,
            ordered: self.ordered,
            window: self.window,
        }
    }
}

impl<R: MasterRecord> PageContext<R> {
    pub fn router(&self) -> ModeRouter<RouteNavigator> {
        self.gateway.router().clone()
    }

    /// Navigator over the ordered view for the open record, if any.
    pub fn navigator(&self) -> Memo<Option<RecordNavigator>> {
        let state = self.state;
        let ordered = self.ordered;
        Memo::new(move |_| {
            let active = state.with(|s| s.form.editing_id())?;
            Some(ordered.with(|o| RecordNavigator::new(o, active)))
        })
    }
}

pub fn field_dom_id(key: &str) -> String {
    format!("field-{}", key)
}

fn focus_field(key: &str) {
    use wasm_bindgen::JsCast;
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&field_dom_id(key)))
    else {
        return;
    };
    if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
        let _ = element.focus();
    }
}

#[component]
pub fn MasterPage<R: MasterRecord>(config: &'static EntityConfig<R>) -> impl IntoView {
    let app = AppConfig::DEFAULT;
    let state = RwSignal::new(PageState::new(config, &app));
    let router = ModeRouter::new(config.base_path, RouteNavigator::install());
    let api = HttpRecordApi::new(api_base(), config.lookups_path);
    let gateway = MutationGateway::new(config, api, state, router, use_toasts());

    let location = use_location();
    let mode = Memo::new(move |_| {
        location
            .pathname
            .with(|path| mode::resolve(config.base_path, path))
            .unwrap_or(Mode::List)
    });
    let revision = Memo::new(move |_| state.with(|s| s.store.revision()));
    let ordered = Memo::new(move |_| state.with(|s| s.ordered(config)));
    let window = Memo::new(move |_| {
        let total = ordered.with(Vec::len);
        state.with(|s| paginate(total, s.view.page, s.view.page_size))
    });

    // Re-derive the form whenever the URL or the collection changes
    let sync_router = gateway.router().clone();
    Effect::new(move |_| {
        let mode = mode.get();
        revision.track();
        match state.with_untracked(|s| s.plan_sync(mode, config)) {
            SyncPlan::Nothing => {}
            SyncPlan::RedirectToList => {
                log::info!("{}: {:?} not found, back to list", R::collection_name(), mode);
                sync_router.go_to_list();
            }
            _ => {
                state.update(|s| {
                    s.sync_mode(mode, config);
                });
            }
        }
    });

    let focus = Memo::new(move |_| state.with(|s| s.form.focus.map(|key| (key, s.form.focus_seq))));
    Effect::new(move |_| {
        if let Some((key, _)) = focus.get() {
            request_animation_frame(move || focus_field(key));
        }
    });

    let loader = gateway.clone();
    spawn_local(async move {
        loader.refresh().await;
        loader.load_lookups().await;
    });

    on_cleanup(move || {
        state.try_update(|s| s.store.close());
    });

    let ctx = PageContext {
        config,
        state,
        gateway,
        mode,
        ordered,
        window,
    };

    let is_list = Memo::new(move |_| mode.get() == Mode::List);
    let category = Signal::derive(move || {
        if is_list.get() {
            PAGE_CAT_LIST
        } else {
            PAGE_CAT_DETAIL
        }
    });

    view! {
        <PageFrame entity=R::collection_name() category=category>
            {move || {
                let ctx = ctx.clone();
                if is_list.get() {
                    view! { <ListView ctx=ctx /> }.into_any()
                } else {
                    view! { <FormView ctx=ctx /> }.into_any()
                }
            }}
        </PageFrame>
    }
}
