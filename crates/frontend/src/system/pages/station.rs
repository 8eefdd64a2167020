use leptos::prelude::*;

use crate::shared::icons::icon;

pub const STATION_MAP_URL: &str = "https://www.google.com/maps/search/Fuel+Station/";

/// Element id the client-only map widget mounts into
pub const STATION_MAP_MOUNT_ID: &str = "station-map";

#[component]
pub fn StationPage() -> impl IntoView {
    view! {
        <div id="center">
            <div class="card card--station">
                <div class="card__header">
                    <span class="card__icon">{icon("fuel")}</span>
                    <div class="card__heading">
                        <h2 class="card__title">"Nearby Stations"</h2>
                        <p class="card__subtitle">"Find fuel and EV charging stations nearby."</p>
                    </div>
                </div>
                <hr class="card__divider" />
                <div class="card__body">
                    <p>
                        "Discover the closest fuel and electric vehicle charging stations. \
                         Plan your journey efficiently with live updates and precise navigation. \
                         Check petrol prices, station details, and get directions to reach your destination smoothly."
                    </p>
                </div>
                <hr class="card__divider" />
                <div class="card__footer">
                    <a class="link link--external" href=STATION_MAP_URL target="_blank" rel="noopener noreferrer">
                        "View on Google Map"
                        {icon("external-link")}
                    </a>
                </div>
            </div>
        </div>
        <div id=STATION_MAP_MOUNT_ID class="station-map"></div>
    }
}
