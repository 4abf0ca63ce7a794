use crate::shared::icons::icon;
use crate::shared::toast_service::use_toasts;
use leptos::prelude::*;

/// Renders the one live toast, top right.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    move || {
        toasts.current().map(|toast| {
            view! {
                <div class=toast.kind.css_class() role="status">
                    <span class="toast__message">{toast.message}</span>
                    <button
                        class="toast__close"
                        title="Dismiss"
                        on:click=move |_| toasts.dismiss()
                    >
                        {icon("x")}
                    </button>
                </div>
            }
        })
    }
}
