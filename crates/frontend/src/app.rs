use crate::routes::routes::AppRoutes;
use crate::shared::master_data::AppConfig;
use crate::shared::toast_service::ToastService;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // One toast channel for every page
    provide_context(ToastService::new(AppConfig::DEFAULT.toast_duration_ms));

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
