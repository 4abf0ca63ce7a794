pub mod left;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

use crate::shared::components::toast_host::ToastHost;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Navbar   |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let left_open = RwSignal::new(true);

    view! {
        <div class="app-layout">
            <TopHeader left_open=left_open />

            <div class="app-body">
                <left::Left open=left_open>
                    <left::Navbar />
                </left::Left>

                <div class="app-main">
                    {children()}
                </div>
            </div>

            <ToastHost />
        </div>
    }
}
