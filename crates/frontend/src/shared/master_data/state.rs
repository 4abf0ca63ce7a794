//! Everything one mounted page owns, and how async work reaches it.

use contracts::domain::common::{MasterRecord, RecordId};
use contracts::shared::lookups::Lookups;
use leptos::prelude::*;

use super::config::{AppConfig, EntityConfig};
use super::dirty;
use super::error::ValidationErrors;
use super::form::FormValues;
use super::mode::Mode;
use super::pipeline;
use super::store::RecordStore;
use super::view::ViewState;

/// Access to page state that may already be gone.
///
/// Both calls return `None` once the owning page was disposed, which is how
/// responses arriving after unmount are dropped.
pub trait StateHandle<S>: Clone + 'static {
    fn read<T>(&self, f: impl FnOnce(&S) -> T) -> Option<T>;
    fn write<T>(&self, f: impl FnOnce(&mut S) -> T) -> Option<T>;
}

impl<S: Send + Sync + 'static> StateHandle<S> for RwSignal<S> {
    fn read<T>(&self, f: impl FnOnce(&S) -> T) -> Option<T> {
        self.try_with_untracked(f)
    }

    fn write<T>(&self, f: impl FnOnce(&mut S) -> T) -> Option<T> {
        self.try_update(f)
    }
}

// ============================================================================
// Form session
// ============================================================================

/// Working copy plus the baseline it is compared against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSession {
    /// `Some(New)` or `Some(Edit(id))` while a form is open
    pub open_for: Option<Mode>,
    pub values: FormValues,
    pub baseline: FormValues,
    pub errors: ValidationErrors,
    pub focus: Option<&'static str>,
    /// Bumped per focus request, so asking twice for one field still fires
    pub focus_seq: u64,
}

impl FormSession {
    pub fn open(&mut self, target: Mode, values: FormValues) {
        self.open_for = Some(target);
        self.baseline = values.clone();
        self.values = values;
        self.errors = ValidationErrors::new();
    }

    pub fn close(&mut self) {
        *self = FormSession {
            focus_seq: self.focus_seq,
            ..FormSession::default()
        };
    }

    pub fn editing_id(&self) -> Option<RecordId> {
        match self.open_for {
            Some(Mode::Edit(id)) => Some(id),
            _ => None,
        }
    }

    pub fn set_field(&mut self, key: &'static str, value: impl Into<String>) {
        self.values.set(key, value);
        self.errors.remove(key);
    }

    pub fn request_focus(&mut self, key: &'static str) {
        self.focus = Some(key);
        self.focus_seq += 1;
    }

    /// Record errors and move focus to the first offending field.
    pub fn fail(&mut self, errors: ValidationErrors) {
        if let Some(first) = errors.first_field() {
            self.request_focus(first);
        }
        self.errors = errors;
    }

    /// The saved values become the new baseline.
    pub fn mark_saved(&mut self) {
        self.baseline = self.values.clone();
    }
}

// ============================================================================
// Page state
// ============================================================================

/// What re-deriving the page from the current mode requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPlan {
    Nothing,
    CloseForm,
    OpenNew,
    OpenEdit(RecordId),
    /// Edit names a record that is not (or no longer) in the store
    RedirectToList,
}

#[derive(Debug, Clone)]
pub struct PageState<R> {
    pub store: RecordStore<R>,
    pub view: ViewState,
    pub form: FormSession,
    /// A create, update or delete is in flight
    pub pending: bool,
    pub refreshing: bool,
    pub lookups: Lookups,
}

impl<R: MasterRecord> PageState<R> {
    pub fn new(config: &EntityConfig<R>, app: &AppConfig) -> Self {
        Self {
            store: RecordStore::new(),
            view: ViewState::new(app.page_size, config.default_sort),
            form: FormSession::default(),
            pending: false,
            refreshing: false,
            lookups: Lookups::default(),
        }
    }

    /// The ordered view; compute once per render and share it.
    pub fn ordered(&self, config: &EntityConfig<R>) -> Vec<R> {
        pipeline::apply(self.store.records(), &self.view, config.scope)
    }

    pub fn scoped_record(&self, id: RecordId, config: &EntityConfig<R>) -> Option<&R> {
        self.store.get(id).filter(|r| (config.scope)(r))
    }

    pub fn is_dirty(&self, config: &EntityConfig<R>) -> bool {
        dirty::compute_dirty(&self.form.values, &self.form.baseline, &config.field_keys())
    }

    pub fn can_save(&self, config: &EntityConfig<R>) -> bool {
        !self.pending
            && self.form.open_for.is_some()
            && dirty::can_save(
                &self.form.values,
                &self.form.baseline,
                &config.field_keys(),
                &config.required_keys(),
            )
    }

    pub fn plan_sync(&self, mode: Mode, config: &EntityConfig<R>) -> SyncPlan {
        match mode {
            Mode::List if self.form.open_for.is_some() => SyncPlan::CloseForm,
            Mode::List => SyncPlan::Nothing,
            Mode::New if self.form.open_for == Some(Mode::New) => SyncPlan::Nothing,
            Mode::New => SyncPlan::OpenNew,
            Mode::Edit(_) if !self.store.is_loaded() => SyncPlan::Nothing,
            Mode::Edit(id) if self.scoped_record(id, config).is_none() => {
                SyncPlan::RedirectToList
            }
            Mode::Edit(_) if self.form.open_for == Some(mode) => SyncPlan::Nothing,
            Mode::Edit(id) => SyncPlan::OpenEdit(id),
        }
    }

    /// Bring the form in line with `mode`. A `RedirectToList` result is
    /// for the caller to act on; the state itself is left untouched.
    pub fn sync_mode(&mut self, mode: Mode, config: &EntityConfig<R>) -> SyncPlan {
        let plan = self.plan_sync(mode, config);
        match plan {
            SyncPlan::Nothing | SyncPlan::RedirectToList => {}
            SyncPlan::CloseForm => self.form.close(),
            SyncPlan::OpenNew => {
                self.form.open(Mode::New, (config.blank_form)());
                if let Some(first) = config.first_input() {
                    self.form.request_focus(first);
                }
            }
            SyncPlan::OpenEdit(id) => {
                if let Some(values) = self.scoped_record(id, config).map(config.to_form) {
                    self.form.open(Mode::Edit(id), values);
                    if let Some(first) = config.first_input() {
                        self.form.request_focus(first);
                    }
                }
            }
        }
        plan
    }
}
