//! In-memory collaborators for driving pages without a browser.

use async_trait::async_trait;
use contracts::domain::common::{MasterRecord, RecordId};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

use super::api::RecordApi;
use super::config::{AppConfig, EntityConfig};
use super::error::ApiError;
use super::gateway::MutationGateway;
use super::mode::{Mode, ModeRouter, Navigate};
use super::state::{PageState, StateHandle};
use super::toast::{Notify, ToastKind};

/// State that can be dropped to simulate the page unmounting.
pub struct SharedState<S>(Rc<RefCell<Option<S>>>);

impl<S> Clone for SharedState<S> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<S> SharedState<S> {
    pub fn new(state: S) -> Self {
        Self(Rc::new(RefCell::new(Some(state))))
    }

    pub fn dispose(&self) {
        self.0.borrow_mut().take();
    }

    /// Panics after `dispose`.
    pub fn get<T>(&self, f: impl FnOnce(&S) -> T) -> T {
        f(self.0.borrow().as_ref().expect("state disposed"))
    }
}

impl<S: 'static> StateHandle<S> for SharedState<S> {
    fn read<T>(&self, f: impl FnOnce(&S) -> T) -> Option<T> {
        self.0.borrow().as_ref().map(f)
    }

    fn write<T>(&self, f: impl FnOnce(&mut S) -> T) -> Option<T> {
        self.0.borrow_mut().as_mut().map(f)
    }
}

#[derive(Clone, Default)]
pub struct NavRecorder(pub Rc<RefCell<Vec<String>>>);

impl NavRecorder {
    pub fn paths(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl Navigate for NavRecorder {
    fn navigate(&self, path: &str) {
        self.0.borrow_mut().push(path.to_string());
    }
}

#[derive(Clone, Default)]
pub struct ToastRecorder(pub Rc<RefCell<Vec<(String, ToastKind)>>>);

impl ToastRecorder {
    pub fn last(&self) -> Option<(String, ToastKind)> {
        self.0.borrow().last().cloned()
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.borrow().iter().map(|(m, _)| m.clone()).collect()
    }
}

impl Notify for ToastRecorder {
    fn show(&self, message: &str, kind: ToastKind) {
        self.0.borrow_mut().push((message.to_string(), kind));
    }
}

/// Scripted backend for one collection.
pub struct Backend<R> {
    pub records: Vec<R>,
    /// Every call, e.g. `"GET all"`, `"PUT 2"`
    pub calls: Vec<String>,
    /// JSON bodies of creates and updates
    pub payloads: Vec<Value>,
    pub fail_fetch: Option<ApiError>,
    pub fail_save: Option<ApiError>,
    pub fail_remove: Option<ApiError>,
    /// Appended to `records` by the next create
    pub next_created: Option<R>,
    pub create_ack: Value,
    /// Runs while a list fetch is in flight
    pub on_fetch: Option<Rc<dyn Fn()>>,
}

impl<R> Default for Backend<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            calls: Vec::new(),
            payloads: Vec::new(),
            fail_fetch: None,
            fail_save: None,
            fail_remove: None,
            next_created: None,
            create_ack: Value::Null,
            on_fetch: None,
        }
    }
}

pub struct FakeApi<R>(pub Rc<RefCell<Backend<R>>>);

impl<R> Clone for FakeApi<R> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<R: MasterRecord> FakeApi<R> {
    pub fn with_records(records: Vec<R>) -> Self {
        Self(Rc::new(RefCell::new(Backend {
            records,
            ..Backend::default()
        })))
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.borrow().calls.clone()
    }

    /// Calls other than list fetches.
    pub fn mutations(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c != "GET all")
            .collect()
    }

    pub fn backend(&self) -> std::cell::RefMut<'_, Backend<R>> {
        self.0.borrow_mut()
    }
}

#[async_trait(?Send)]
impl<R: MasterRecord> RecordApi<R> for FakeApi<R> {
    async fn fetch_all(&self) -> Result<Vec<R>, ApiError> {
        let hook = self.0.borrow().on_fetch.clone();
        if let Some(hook) = hook {
            hook();
        }
        let mut backend = self.0.borrow_mut();
        backend.calls.push("GET all".into());
        match backend.fail_fetch.clone() {
            Some(e) => Err(e),
            None => Ok(backend.records.clone()),
        }
    }

    async fn create(&self, payload: &R::Payload) -> Result<Value, ApiError> {
        let mut backend = self.0.borrow_mut();
        backend.calls.push("POST add".into());
        backend.payloads.push(serde_json::to_value(payload).unwrap());
        if let Some(e) = backend.fail_save.clone() {
            return Err(e);
        }
        if let Some(record) = backend.next_created.take() {
            backend.records.push(record);
        }
        Ok(backend.create_ack.clone())
    }

    async fn update(&self, id: RecordId, payload: &R::Payload) -> Result<Value, ApiError> {
        let mut backend = self.0.borrow_mut();
        backend.calls.push(format!("PUT {}", id));
        backend.payloads.push(serde_json::to_value(payload).unwrap());
        match backend.fail_save.clone() {
            Some(e) => Err(e),
            None => Ok(serde_json::json!({"message": "updated"})),
        }
    }

    async fn remove(&self, id: RecordId) -> Result<Value, ApiError> {
        let mut backend = self.0.borrow_mut();
        backend.calls.push(format!("DELETE {}", id));
        if let Some(e) = backend.fail_remove.clone() {
            return Err(e);
        }
        backend.records.retain(|r| r.id() != id);
        Ok(serde_json::json!({"message": "deleted"}))
    }
}

pub type TestGateway<R> =
    MutationGateway<R, FakeApi<R>, SharedState<PageState<R>>, NavRecorder, ToastRecorder>;

/// A mounted page with its collaborators, already loaded once.
pub struct Harness<R: MasterRecord> {
    pub config: &'static EntityConfig<R>,
    pub gateway: TestGateway<R>,
    pub api: FakeApi<R>,
    pub state: SharedState<PageState<R>>,
    pub nav: NavRecorder,
    pub toasts: ToastRecorder,
}

impl<R: MasterRecord> Harness<R> {
    pub fn mount(config: &'static EntityConfig<R>, records: Vec<R>) -> Self {
        let api = FakeApi::with_records(records);
        let state = SharedState::new(PageState::new(config, &AppConfig::default()));
        let nav = NavRecorder::default();
        let toasts = ToastRecorder::default();
        let gateway = MutationGateway::new(
            config,
            api.clone(),
            state.clone(),
            ModeRouter::new(config.base_path, nav.clone()),
            toasts.clone(),
        );
        futures::executor::block_on(gateway.refresh());
        Self {
            config,
            gateway,
            api,
            state,
            nav,
            toasts,
        }
    }

    /// What the page does when the URL changes to `mode`.
    pub fn enter(&self, mode: Mode) {
        let config = self.config;
        let plan = self.state.write(|s| s.sync_mode(mode, config));
        assert!(plan.is_some());
    }

    pub fn set_field(&self, key: &'static str, value: &str) {
        self.state.write(|s| s.form.set_field(key, value));
    }
}
