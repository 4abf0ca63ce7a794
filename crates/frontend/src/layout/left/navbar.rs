use crate::shared::icons;
use leptos::prelude::*;
use leptos_router::components::A;

/// `(path, icon, title)` of every master-data page
pub const NAV_ITEMS: &[(&str, &str, &str)] = &[
    ("/items", "items", "Items"),
    ("/brands", "tag", "Brands"),
    ("/makes", "car", "Makes"),
    ("/groups", "layers", "Groups"),
    ("/customers", "customers", "Customers"),
    ("/suppliers", "suppliers", "Suppliers"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="main-nav-bar">
            <ul>
                {NAV_ITEMS.iter().map(|(path, icon_name, title)| {
                    view! {
                        <li>
                            <A href=*path>
                                {icons::icon(icon_name)}
                                <span>{*title}</span>
                            </A>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
