pub mod header;

use crate::system::auth::context::SessionContext;
use header::Header;
use leptos::prelude::*;

/// Application shell: header on top, routed page below
#[component]
pub fn Shell(session: SessionContext, children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header session=session />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
