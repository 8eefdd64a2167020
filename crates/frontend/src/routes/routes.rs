use crate::domain::a001_parking_order::ui::list::OrdersListPage;
use crate::layout::Shell;
use crate::system::auth::context::SessionContext;
use crate::system::pages::home::HomePage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::station::StationPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes(session: SessionContext) -> impl IntoView {
    view! {
        <Router>
            <Shell session=session>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=move || view! { <HomePage session=session /> } />
                    <Route path=path!("/station") view=StationPage />
                    <Route path=path!("/admin/orders") view=move || view! { <OrdersListPage session=session /> } />
                </Routes>
            </Shell>
        </Router>
    }
}
