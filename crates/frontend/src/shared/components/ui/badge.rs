use contracts::enums::StatusColor;
use leptos::prelude::*;

/// Colored pill for a semantic color tag
#[component]
pub fn Badge(
    color: StatusColor,
    children: Children,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let color_class = badge_class(color);
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", color_class, additional_class())>
            {children()}
        </span>
    }
}

pub fn badge_class(color: StatusColor) -> &'static str {
    match color {
        StatusColor::Warning => "badge--warning",
        StatusColor::Success => "badge--success",
        StatusColor::Danger => "badge--error",
        StatusColor::Neutral => "badge--neutral",
    }
}
