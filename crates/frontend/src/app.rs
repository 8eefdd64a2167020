use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One session for the whole app, loaded once at startup
    let session = SessionContext::new();
    session.refresh();

    view! {
        <AppRoutes session=session />
    }
}
