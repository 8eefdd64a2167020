use contracts::system::auth::UserProfile;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::{Button, ButtonAppearance};

use super::menu::{find_action, profile_menu, MenuAction};
use crate::shared::browser;
use crate::shared::components::dropdown::{ActionDropdown, DropdownItem};
use crate::shared::config::config;
use crate::system::auth::context::SessionContext;
use crate::system::auth::cookie::has_session_cookie;
use crate::system::auth::session::{account_slot, AccountSlot, MountDecision, MountGuard};

#[component]
pub fn Header(session: SessionContext) -> impl IntoView {
    let navigate = StoredValue::new_local(use_navigate());
    let go = move |path: &str| navigate.with_value(|nav| nav(path, Default::default()));
    let (navigating, set_navigating) = signal(false);

    // Runs on mount and on every status change
    Effect::new(move |prev: Option<MountGuard>| {
        let mut guard = prev.unwrap_or_default();
        let status = session.status();
        let has_cookie = !status.is_loading() && has_session_cookie();

        match guard.observe(&status, has_cookie) {
            Some(MountDecision::Reload) => {
                log::info!("Session cookie present without profile, reloading");
                browser::reload();
            }
            Some(MountDecision::RedirectToLogin) => {
                let login = &config().session.login_route;
                log::info!("No session, redirecting to {}", login);
                browser::redirect(login);
            }
            Some(MountDecision::Stay) | None => {}
        }

        set_navigating.set(guard.is_navigating());
        guard
    });

    let logout = move || {
        spawn_local(async move {
            session.logout().await;
            go(&config().session.home_route);
        });
    };

    let on_menu_select = move |profile: UserProfile| {
        let entries = profile_menu(&profile);
        Callback::new(move |key: String| match find_action(&entries, &key) {
            Some(MenuAction::Navigate(path)) => go(path),
            Some(MenuAction::Logout) => logout(),
            Some(MenuAction::Info) => {}
            None => log::warn!("Unknown menu entry: {}", key),
        })
    };

    let account = move || match account_slot(&session.status(), navigating.get()) {
        AccountSlot::Skeleton => {
            view! { <div class="skeleton skeleton--avatar" aria-busy="true"></div> }.into_any()
        }
        AccountSlot::Menu(profile) => {
            let items: Vec<DropdownItem> = profile_menu(&profile)
                .into_iter()
                .map(|e| (e.key.to_string(), e.label))
                .collect();
            let trigger_profile = profile.clone();
            view! {
                <ActionDropdown
                    trigger=ViewFn::from(move || avatar(&trigger_profile))
                    trigger_class="header__avatar-button"
                    aria_label="Profile Actions"
                    items=items
                    on_select=on_menu_select(profile)
                />
            }
            .into_any()
        }
        AccountSlot::SignIn => view! {
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| browser::redirect(&config().session.login_route)
            >
                "Sign In"
            </Button>
        }
        .into_any(),
        AccountSlot::Empty => ().into_any(),
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <img class="header__logo" src="logo.png" alt="Parkwiz logo" width="40" height="40" />
                <A href="/" attr:class="header__title">"PARKWIZ"</A>
            </div>
            <div class="header__actions">
                {account}
            </div>
        </header>
    }
}

fn avatar(profile: &UserProfile) -> AnyView {
    match &profile.avatar {
        Some(src) => view! {
            <img class="avatar avatar--sm" src=src.clone() alt=profile.name.clone() />
        }
        .into_any(),
        None => {
            let initial = profile
                .name
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_default();
            view! { <span class="avatar avatar--sm avatar--initials" title=profile.name.clone()>{initial}</span> }
                .into_any()
        }
    }
}
