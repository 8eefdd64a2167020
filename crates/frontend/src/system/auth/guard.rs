use leptos::prelude::*;

use super::context::SessionContext;

/// Component that requires admin privileges
/// Shows a placeholder while the session loads and a fallback for everyone else
#[component]
pub fn RequireAdmin(session: SessionContext, children: ChildrenFn) -> impl IntoView {
    view! {
        <Show
            when=move || session.is_admin()
            fallback=move || {
                if session.is_loading() {
                    view! { <div class="guard__loading">"Loading..."</div> }.into_any()
                } else {
                    view! { <div class="guard__denied">"Access denied. Admin privileges required."</div> }.into_any()
                }
            }
        >
            {children()}
        </Show>
    }
}
