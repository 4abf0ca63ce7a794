//! App-wide toast channel backed by a signal.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::master_data::toast::{Notify, Toast, ToastKind, ToastState};

#[derive(Clone, Copy)]
pub struct ToastService {
    state: RwSignal<ToastState>,
    duration_ms: u32,
}

impl ToastService {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            state: RwSignal::new(ToastState::default()),
            duration_ms,
        }
    }

    /// Tracked read for the toast host.
    pub fn current(&self) -> Option<Toast> {
        self.state.with(|t| t.current().cloned())
    }

    pub fn dismiss(&self) {
        self.state.update(|t| t.dismiss());
    }
}

impl Notify for ToastService {
    fn show(&self, message: &str, kind: ToastKind) {
        let Some(generation) = self.state.try_update(|t| t.show(message, kind)) else {
            return;
        };
        let state = self.state;
        let duration_ms = self.duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            state.try_update(|t| t.expire(generation));
        });
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in context")
}
