use leptos::prelude::*;
use leptos_router::components::A;

/// PageHeader component - title row with a breadcrumb back to home
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: Signal<String>,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Children content (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <nav class="page-header__breadcrumb">
                    <A href="/">"Home"</A>
                    <span class="page-header__breadcrumb-sep">"/"</span>
                    <span>{move || title.get()}</span>
                </nav>
                <div class="page-header__text">
                    <h1 class="page-header__title">{move || title.get()}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
