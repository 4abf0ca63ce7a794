//! Create / update / delete, each followed by a full refetch.
//!
//! Every failure ends up as a toast here; callers only look at the
//! returned outcome when they want to (tests do).

use contracts::domain::common::{MasterRecord, RecordId};
use serde_json::Value;

use super::api::RecordApi;
use super::config::{AfterSave, EntityConfig};
use super::error::{ApiError, SaveError};
use super::mode::{Mode, ModeRouter, Navigate};
use super::state::{PageState, StateHandle};
use super::store::FetchOutcome;
use super::toast::Notify;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    Save,
    /// New mode only; on Edit it behaves like `Save`
    SaveAndAddAnother,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Another mutation was in flight, or no form was open
    Ignored,
    Created { id: Option<RecordId> },
    Updated { id: RecordId },
    /// The page went away mid-request
    Abandoned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Ignored,
    Declined,
    Deleted,
    Failed,
}

/// Explicit user confirmation before a delete.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

struct PreparedSave<P> {
    target: Mode,
    payload: P,
}

pub struct MutationGateway<R: MasterRecord, A, S, N, T> {
    config: &'static EntityConfig<R>,
    api: A,
    state: S,
    router: ModeRouter<N>,
    notify: T,
}

impl<R, A, S, N, T> Clone for MutationGateway<R, A, S, N, T>
where
    R: MasterRecord,
    A: Clone,
    S: Clone,
    N: Clone,
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            api: self.api.clone(),
            state: self.state.clone(),
            router: self.router.clone(),
            notify: self.notify.clone(),
        }
    }
}

impl<R, A, S, N, T> MutationGateway<R, A, S, N, T>
where
    R: MasterRecord,
    A: RecordApi<R>,
    S: StateHandle<PageState<R>>,
    N: Navigate,
    T: Notify,
{
    pub fn new(
        config: &'static EntityConfig<R>,
        api: A,
        state: S,
        router: ModeRouter<N>,
        notify: T,
    ) -> Self {
        Self {
            config,
            api,
            state,
            router,
            notify,
        }
    }

    pub fn router(&self) -> &ModeRouter<N> {
        &self.router
    }

    pub fn config(&self) -> &'static EntityConfig<R> {
        self.config
    }

    /// Sequenced refetch; a failure keeps the current list.
    pub async fn refresh(&self) -> FetchOutcome {
        let Some(ticket) = self.state.write(|s| {
            s.refreshing = true;
            s.store.begin_fetch()
        }) else {
            return FetchOutcome::Closed;
        };
        let result = self.api.fetch_all().await;
        let outcome = self
            .state
            .write(|s| {
                let outcome = s.store.complete_fetch(ticket, result);
                if outcome != FetchOutcome::Superseded {
                    s.refreshing = false;
                }
                outcome
            })
            .unwrap_or(FetchOutcome::Closed);
        if let FetchOutcome::Failed(_) = &outcome {
            self.notify.error(&format!(
                "Error fetching {}",
                R::list_name().to_lowercase()
            ));
        }
        outcome
    }

    /// Select-field options; failures are logged and leave the lists empty.
    pub async fn load_lookups(&self) {
        if self.config.lookups_path.is_none() {
            return;
        }
        match self.api.fetch_lookups().await {
            Ok(lookups) => {
                self.state.write(|s| s.lookups = lookups);
            }
            Err(e) => log::warn!("{}: lookups failed: {}", R::collection_name(), e),
        }
    }

    fn prepare_save(&self, s: &mut PageState<R>) -> Result<Option<PreparedSave<R::Payload>>, SaveError> {
        if s.pending {
            return Ok(None);
        }
        let Some(target) = s.form.open_for else {
            return Ok(None);
        };

        let mut errors = self.config.validate(&s.form.values);
        if errors.is_empty() {
            match (self.config.to_payload)(&s.form.values) {
                Ok(payload) => {
                    let name = s.form.values.get(self.config.name_field);
                    let editing = s.form.editing_id();
                    if self
                        .config
                        .is_duplicate(s.store.records(), name, editing)
                    {
                        let err = SaveError::Duplicate {
                            field: self.config.name_field,
                            message: self.config.duplicate_message,
                        };
                        errors.push(self.config.name_field, err.to_string());
                        s.form.fail(errors);
                        return Err(err);
                    }
                    s.pending = true;
                    s.form.errors = Default::default();
                    return Ok(Some(PreparedSave { target, payload }));
                }
                Err(payload_errors) => errors = payload_errors,
            }
        }
        s.form.fail(errors.clone());
        Err(SaveError::Validation(errors))
    }

    pub async fn save(&self, action: SaveAction) -> Result<SaveOutcome, SaveError> {
        let prepared = match self.state.write(|s| self.prepare_save(s)) {
            None => return Ok(SaveOutcome::Abandoned),
            Some(Ok(None)) => return Ok(SaveOutcome::Ignored),
            Some(Ok(Some(prepared))) => prepared,
            Some(Err(err)) => {
                match &err {
                    SaveError::Validation(errors) => self.notify.error(&format!(
                        "Please fill in all required fields: {}",
                        errors.summary()
                    )),
                    other => self.notify.error(&other.to_string()),
                }
                return Err(err);
            }
        };

        let entity = self.config.entity_name;
        let result = match prepared.target {
            Mode::Edit(id) => {
                log::info!("{}: updating {}", R::collection_name(), id);
                self.api.update(id, &prepared.payload).await
            }
            _ => {
                log::info!("{}: creating", R::collection_name());
                self.api.create(&prepared.payload).await
            }
        };

        let ack = match result {
            Ok(ack) => ack,
            Err(e) => {
                log::error!("{}: save failed: {}", R::collection_name(), e);
                self.state.write(|s| s.pending = false);
                self.notify.error(&e.user_message("Something went wrong!"));
                return Err(SaveError::Api(e));
            }
        };

        let outcome = match prepared.target {
            Mode::Edit(id) => {
                self.notify
                    .success(&format!("{} updated successfully!", entity));
                SaveOutcome::Updated { id }
            }
            _ => {
                self.notify.success(&format!("{} added successfully!", entity));
                SaveOutcome::Created {
                    id: R::created_id(&ack),
                }
            }
        };

        self.refresh().await;
        if self.state.write(|s| s.pending = false).is_none() {
            return Ok(SaveOutcome::Abandoned);
        }
        self.after_save(action, prepared.target, outcome);
        Ok(outcome)
    }

    fn after_save(&self, action: SaveAction, target: Mode, outcome: SaveOutcome) {
        if action == SaveAction::SaveAndAddAnother && target == Mode::New {
            let first = self.config.first_input();
            self.state.write(|s| {
                s.form.open(Mode::New, (self.config.blank_form)());
                if let Some(first) = first {
                    s.form.request_focus(first);
                }
            });
            return;
        }
        match self.config.after_save {
            AfterSave::ReturnToList => self.router.go_to_list(),
            AfterSave::StayOpen => {
                self.state.write(|s| s.form.mark_saved());
                match outcome {
                    SaveOutcome::Created { id: Some(id) } => self.router.go_to_edit(id),
                    SaveOutcome::Created { id: None } => self.router.go_to_list(),
                    _ => {}
                }
            }
        }
    }

    pub async fn remove(&self, id: RecordId, confirm: &impl Confirm) -> RemoveOutcome {
        let Some(pending) = self.state.read(|s| s.pending) else {
            return RemoveOutcome::Ignored;
        };
        if pending {
            return RemoveOutcome::Ignored;
        }
        if !confirm.confirm(&self.config.delete_confirmation()) {
            return RemoveOutcome::Declined;
        }
        self.state.write(|s| s.pending = true);

        log::info!("{}: deleting {}", R::collection_name(), id);
        let result: Result<Value, ApiError> = self.api.remove(id).await;

        match result {
            Ok(_) => {
                self.notify.success(&format!(
                    "{} deleted successfully!",
                    self.config.entity_name
                ));
                self.refresh().await;
                let was_open = self
                    .state
                    .write(|s| {
                        s.pending = false;
                        s.form.editing_id() == Some(id)
                    })
                    .unwrap_or(false);
                if was_open {
                    self.router.go_to_list();
                }
                RemoveOutcome::Deleted
            }
            Err(ApiError::InUse { message }) => {
                log::warn!("{}: {} is referenced elsewhere", R::collection_name(), id);
                self.state.write(|s| s.pending = false);
                let server = message
                    .as_deref()
                    .map(str::trim)
                    .filter(|m| self.config.in_use_from_server && !m.is_empty());
                self.notify.error(server.unwrap_or(self.config.in_use_message));
                RemoveOutcome::Failed
            }
            Err(e) => {
                log::error!("{}: delete failed: {}", R::collection_name(), e);
                self.state.write(|s| s.pending = false);
                self.notify.error(&format!(
                    "Error deleting {}",
                    self.config.entity_name.to_lowercase()
                ));
                RemoveOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_brand::config::BRAND_CONFIG;
    use crate::domain::a005_item::config::ITEM_CONFIG;
    use crate::shared::master_data::navigator::RecordNavigator;
    use crate::shared::master_data::testing::Harness;
    use crate::shared::master_data::toast::ToastKind;
    use contracts::domain::a001_brand::aggregate::Brand;
    use contracts::domain::a005_item::aggregate::Item;
    use futures::executor::block_on;
    use std::rc::Rc;

    fn brand(id: i64, name: &str) -> Brand {
        Brand {
            id: RecordId(id),
            name: name.to_string(),
        }
    }

    fn brands() -> Harness<Brand> {
        Harness::mount(&BRAND_CONFIG, vec![brand(1, "Bosch"), brand(2, "Denso")])
    }

    fn item(code: i64, name: &str) -> Item {
        serde_json::from_value(serde_json::json!({
            "itemcode": code, "itemname": name, "groupid": 3, "makeid": 4,
            "brandid": 1, "hsncode": "8511", "cgst": "9.00", "sgst": "9.00",
            "cost": "$1,250.00"
        }))
        .unwrap()
    }

    #[test]
    fn test_rename_to_existing_name_is_rejected_locally() {
        let page = brands();
        page.enter(Mode::Edit(RecordId(2)));
        page.set_field("BrandName", "  BOSCH ");

        let result = block_on(page.gateway.save(SaveAction::Save));
        assert!(matches!(result, Err(SaveError::Duplicate { .. })));
        assert!(page.api.mutations().is_empty());
        assert_eq!(
            page.toasts.last(),
            Some(("Brand Name already exists!".to_string(), ToastKind::Error))
        );
        page.state.get(|s| {
            assert!(s.form.errors.contains("BrandName"));
            assert_eq!(s.form.focus, Some("BrandName"));
            assert!(!s.pending);
        });
    }

    #[test]
    fn test_keeping_own_name_is_not_a_duplicate() {
        let page = brands();
        page.enter(Mode::Edit(RecordId(2)));
        page.set_field("BrandName", "denso");

        let result = block_on(page.gateway.save(SaveAction::Save));
        assert_eq!(result, Ok(SaveOutcome::Updated { id: RecordId(2) }));
        assert_eq!(page.api.mutations(), ["PUT 2"]);
        let body = page.api.backend().payloads[0].clone();
        assert_eq!(body["BrandName"], "denso");
        assert!(body.get("BrandID").is_none());
        assert_eq!(page.nav.paths(), ["/brands"]);
    }

    #[test]
    fn test_missing_required_field_never_reaches_server() {
        let page = brands();
        page.enter(Mode::New);

        let result = block_on(page.gateway.save(SaveAction::Save));
        assert!(matches!(result, Err(SaveError::Validation(_))));
        assert!(page.api.mutations().is_empty());
        assert_eq!(
            page.toasts.last().map(|t| t.0),
            Some("Please fill in all required fields: Brand Name is required".to_string())
        );
    }

    #[test]
    fn test_delete_in_use_keeps_list() {
        let page = brands();
        page.api.backend().fail_remove = Some(ApiError::InUse { message: None });

        let outcome = block_on(page.gateway.remove(RecordId(1), &|_: &str| true));
        assert_eq!(outcome, RemoveOutcome::Failed);
        assert_eq!(
            page.toasts.last(),
            Some((
                "Record exists in item master, cannot delete".to_string(),
                ToastKind::Error
            ))
        );
        page.state.get(|s| {
            assert_eq!(s.store.records().len(), 2);
            assert!(s.store.get(RecordId(1)).is_some());
            assert!(!s.pending);
        });
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let page = brands();
        let asked = std::cell::RefCell::new(String::new());
        let decline = |message: &str| {
            *asked.borrow_mut() = message.to_string();
            false
        };

        let outcome = block_on(page.gateway.remove(RecordId(1), &decline));
        assert_eq!(outcome, RemoveOutcome::Declined);
        assert_eq!(*asked.borrow(), "Are you sure you want to delete this Brand?");
        assert!(page.api.mutations().is_empty());
    }

    #[test]
    fn test_delete_of_open_record_returns_to_list() {
        let page = brands();
        page.enter(Mode::Edit(RecordId(2)));

        let outcome = block_on(page.gateway.remove(RecordId(2), &|_: &str| true));
        assert_eq!(outcome, RemoveOutcome::Deleted);
        assert_eq!(page.nav.paths(), ["/brands"]);
        assert_eq!(
            page.toasts.last().map(|t| t.0),
            Some("Brand deleted successfully!".to_string())
        );
        page.state.get(|s| assert!(s.store.get(RecordId(2)).is_none()));
    }

    #[test]
    fn test_other_delete_failure_is_generic() {
        let page = brands();
        page.api.backend().fail_remove = Some(ApiError::Status {
            status: 500,
            message: Some("boom".into()),
        });
        block_on(page.gateway.remove(RecordId(1), &|_: &str| true));
        assert_eq!(
            page.toasts.last().map(|t| t.0),
            Some("Error deleting brand".to_string())
        );
    }

    #[test]
    fn test_save_is_ignored_while_pending() {
        let page = brands();
        page.enter(Mode::New);
        page.set_field("BrandName", "Valeo");
        page.state.write(|s| s.pending = true);

        let result = block_on(page.gateway.save(SaveAction::Save));
        assert_eq!(result, Ok(SaveOutcome::Ignored));
        assert!(page.api.mutations().is_empty());
        let outcome = block_on(page.gateway.remove(RecordId(1), &|_: &str| true));
        assert_eq!(outcome, RemoveOutcome::Ignored);
    }

    #[test]
    fn test_save_and_add_another_resets_to_blank_baseline() {
        let page = brands();
        page.enter(Mode::New);
        page.set_field("BrandName", "Valeo");
        page.api.backend().next_created = Some(brand(3, "Valeo"));
        page.api.backend().create_ack = serde_json::json!({"brandId": 3});

        let result = block_on(page.gateway.save(SaveAction::SaveAndAddAnother));
        assert_eq!(
            result,
            Ok(SaveOutcome::Created {
                id: Some(RecordId(3))
            })
        );
        assert!(page.nav.paths().is_empty(), "stays on New");
        page.state.get(|s| {
            assert_eq!(s.form.open_for, Some(Mode::New));
            assert_eq!(s.form.values.get("BrandName"), "");
            assert_eq!(s.form.values, s.form.baseline);
            assert_eq!(s.form.focus, Some("BrandName"));
            assert_eq!(s.store.records().len(), 3);
        });
        assert_eq!(
            page.toasts.last(),
            Some(("Brand added successfully!".to_string(), ToastKind::Success))
        );
    }

    #[test]
    fn test_server_failure_keeps_form_open() {
        let page = brands();
        page.enter(Mode::New);
        page.set_field("BrandName", "Valeo");
        page.api.backend().fail_save = Some(ApiError::Status {
            status: 500,
            message: Some("DB Error".into()),
        });

        let result = block_on(page.gateway.save(SaveAction::Save));
        assert!(matches!(result, Err(SaveError::Api(_))));
        assert_eq!(page.toasts.last().map(|t| t.0), Some("DB Error".to_string()));
        assert!(page.nav.paths().is_empty());
        page.state.get(|s| {
            assert!(!s.pending);
            assert_eq!(s.form.values.get("BrandName"), "Valeo");
        });

        page.api.backend().fail_save = Some(ApiError::Transport("offline".into()));
        block_on(page.gateway.save(SaveAction::Save)).ok();
        assert_eq!(
            page.toasts.last().map(|t| t.0),
            Some("Something went wrong!".to_string())
        );
    }

    #[test]
    fn test_stay_open_update_recaptures_baseline() {
        let page = Harness::mount(&ITEM_CONFIG, vec![item(110, "Bosch Spark Plug 110mm")]);
        page.enter(Mode::Edit(RecordId(110)));
        page.set_field("Packing", "Box of 4");
        page.state.get(|s| assert!(s.is_dirty(page.config)));

        let result = block_on(page.gateway.save(SaveAction::Save));
        assert_eq!(result, Ok(SaveOutcome::Updated { id: RecordId(110) }));
        assert!(page.nav.paths().is_empty());
        page.state.get(|s| {
            assert!(!s.is_dirty(page.config));
            assert_eq!(s.form.values.get("Packing"), "Box of 4");
        });
        let body = page.api.backend().payloads[0].clone();
        assert_eq!(body["Cost"], 1250.0);
        assert_eq!(body["CGST"], 9.0);
    }

    #[test]
    fn test_stay_open_create_moves_to_generated_id() {
        let page = Harness::mount(&ITEM_CONFIG, vec![item(110, "Bosch Spark Plug 110mm")]);
        page.enter(Mode::New);
        for (key, value) in [
            ("ItemName", "Bosch Filter"),
            ("HSNCode", "8421"),
            ("GroupID", "3"),
            ("BrandID", "1"),
            ("MakeID", "4"),
            ("CGST", "9"),
            ("SGST", "9"),
        ] {
            page.set_field(key, value);
        }
        page.api.backend().next_created = Some(item(512, "Bosch Filter"));
        page.api.backend().create_ack = serde_json::json!({"itemCode": 512});

        let result = block_on(page.gateway.save(SaveAction::Save));
        assert_eq!(
            result,
            Ok(SaveOutcome::Created {
                id: Some(RecordId(512))
            })
        );
        assert_eq!(page.nav.paths(), ["/items/edit/512"]);
    }

    #[test]
    fn test_refresh_failure_keeps_previous_list() {
        let page = brands();
        page.api.backend().fail_fetch = Some(ApiError::Transport("offline".into()));

        let outcome = block_on(page.gateway.refresh());
        assert!(matches!(outcome, FetchOutcome::Failed(_)));
        assert_eq!(
            page.toasts.last(),
            Some(("Error fetching brands".to_string(), ToastKind::Error))
        );
        page.state.get(|s| {
            assert_eq!(s.store.records().len(), 2);
            assert!(!s.refreshing);
        });
    }

    #[test]
    fn test_repeated_refresh_gives_same_order() {
        let page = Harness::mount(
            &BRAND_CONFIG,
            vec![brand(3, "Mahle"), brand(1, "bosch"), brand(2, "Bosch")],
        );
        page.state.write(|s| s.view.toggle_sort("brandname"));
        let first = page.state.get(|s| s.ordered(page.config));
        block_on(page.gateway.refresh());
        let second = page.state.get(|s| s.ordered(page.config));
        assert_eq!(first, second);
        assert_eq!(first[0].id, RecordId(1));
    }

    #[test]
    fn test_response_after_unmount_is_dropped() {
        let page = brands();
        let state = page.state.clone();
        page.api.backend().on_fetch = Some(Rc::new(move || state.dispose()));

        let outcome = block_on(page.gateway.refresh());
        assert_eq!(outcome, FetchOutcome::Closed);
        assert!(page.toasts.messages().is_empty());
    }

    #[test]
    fn test_navigator_follows_refresh_after_concurrent_delete() {
        let page = Harness::mount(
            &BRAND_CONFIG,
            vec![brand(1, "Bosch"), brand(2, "Denso"), brand(3, "Mahle")],
        );
        page.enter(Mode::Edit(RecordId(1)));
        let before = page.state.get(|s| RecordNavigator::new(&s.ordered(page.config), RecordId(1)));
        assert_eq!(before.next_id(), Some(RecordId(2)));

        // someone else deletes Denso
        page.api.backend().records.retain(|b| b.id != RecordId(2));
        block_on(page.gateway.refresh());

        let after = page.state.get(|s| RecordNavigator::new(&s.ordered(page.config), RecordId(1)));
        assert_eq!(after.next_id(), Some(RecordId(3)));
        assert_eq!(after.label(), "Record 1 / 2");
    }

    #[test]
    fn test_pending_held_until_delete_refresh_lands() {
        let page = brands();
        let seen = Rc::new(std::cell::Cell::new(None));
        let (state, during_fetch) = (page.state.clone(), seen.clone());
        page.api.backend().on_fetch = Some(Rc::new(move || {
            during_fetch.set(state.read(|s| s.pending));
        }));

        let outcome = block_on(page.gateway.remove(RecordId(1), &|_: &str| true));
        assert_eq!(outcome, RemoveOutcome::Deleted);
        assert_eq!(seen.get(), Some(true));
        page.state.get(|s| assert!(!s.pending));
    }
}
