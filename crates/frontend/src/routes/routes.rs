use crate::domain::a001_brand::ui::BrandPage;
use crate::domain::a002_make::ui::MakePage;
use crate::domain::a003_group::ui::GroupPage;
use crate::domain::a004_customer::ui::CustomerPage;
use crate::domain::a005_item::ui::ItemPage;
use crate::domain::a006_supplier::ui::SupplierPage;
use crate::layout::Shell;
use crate::routes::home::HomePage;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

// Each entity page is the parent route, so stepping between its list,
// new and edit children keeps the page (and its fetched records) mounted.
// The page reads the mode from the path itself.

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <HomePage /> }>
                    <Route path=path!("/") view=HomePage />
                    <ParentRoute path=path!("/brands") view=BrandPage>
                        <Route path=path!("") view=|| () />
                        <Route path=path!("new") view=|| () />
                        <Route path=path!("edit/:id") view=|| () />
                    </ParentRoute>
                    <ParentRoute path=path!("/makes") view=MakePage>
                        <Route path=path!("") view=|| () />
                        <Route path=path!("new") view=|| () />
                        <Route path=path!("edit/:id") view=|| () />
                    </ParentRoute>
                    <ParentRoute path=path!("/groups") view=GroupPage>
                        <Route path=path!("") view=|| () />
                        <Route path=path!("new") view=|| () />
                        <Route path=path!("edit/:id") view=|| () />
                    </ParentRoute>
                    <ParentRoute path=path!("/customers") view=CustomerPage>
                        <Route path=path!("") view=|| () />
                        <Route path=path!("new") view=|| () />
                        <Route path=path!("edit/:id") view=|| () />
                    </ParentRoute>
                    <ParentRoute path=path!("/suppliers") view=SupplierPage>
                        <Route path=path!("") view=|| () />
                        <Route path=path!("new") view=|| () />
                        <Route path=path!("edit/:id") view=|| () />
                    </ParentRoute>
                    <ParentRoute path=path!("/items") view=ItemPage>
                        <Route path=path!("") view=|| () />
                        <Route path=path!("new") view=|| () />
                        <Route path=path!("edit/:id") view=|| () />
                    </ParentRoute>
                </Routes>
            </Shell>
        </Router>
    }
}
