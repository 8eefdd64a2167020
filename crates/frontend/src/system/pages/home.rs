use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::system::auth::context::SessionContext;

/// Landing page shortcuts: `(href, icon, title, text)`
const FEATURES: [(&str, &str, &str, &str); 4] = [
    ("/bookslot", "calendar", "Book a slot", "Reserve a parking slot before you arrive."),
    ("/pslive", "map-pin", "Live status", "See which slots are free right now."),
    ("/parking_navigation", "navigation", "Navigation", "Get guided to your slot inside the lot."),
    ("/station", "fuel", "Stations", "Find fuel and EV charging stations nearby."),
];

#[component]
pub fn HomePage(session: SessionContext) -> impl IntoView {
    view! {
        <Show
            when=move || !session.is_loading()
            fallback=|| view! { <div class="skeleton skeleton--viewport" aria-busy="true"></div> }
        >
            <Landing />
        </Show>
    }
}

#[component]
fn Landing() -> impl IntoView {
    view! {
        <div class="page page--home">
            <section class="hero">
                <h1 class="hero__title">"Smart parking, without the search"</h1>
                <p class="hero__subtitle">
                    "Find a free slot, book it in advance and drive straight to it."
                </p>
                <A href="/bookslot" attr:class="button button--primary">"Book now"</A>
            </section>

            <section class="features">
                {FEATURES
                    .iter()
                    .map(|&(href, icon_name, title, text)| {
                        view! {
                            <A href=href attr:class="feature-card">
                                <span class="feature-card__icon">{icon(icon_name)}</span>
                                <h3 class="feature-card__title">{title}</h3>
                                <p class="feature-card__text">{text}</p>
                            </A>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
