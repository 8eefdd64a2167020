//! Small dropdowns used in table toolbars and row menus

use crate::shared::icons::icon;
use leptos::prelude::*;
use std::collections::HashSet;

/// Dropdown item: `(key, label)`
pub type DropdownItem = (String, String);

/// Button that opens a list of checkable options; stays open while toggling
#[component]
pub fn MultiSelectDropdown(
    #[prop(into)]
    label: String,

    options: Vec<DropdownItem>,

    #[prop(into)]
    selected: Signal<HashSet<String>>,

    /// Called with the key of the option that was clicked
    on_toggle: Callback<String>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="dropdown" on:mouseleave=move |_| set_open.set(false)>
            <button
                class="button button--flat button--sm"
                aria-haspopup="true"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|v| *v = !*v)
            >
                {label}
                {icon("chevron-down")}
            </button>
            <Show when=move || open.get()>
                <ul class="dropdown__menu" role="menu">
                    {options.iter().cloned().map(|(key, item_label)| {
                        let key_for_checked = key.clone();
                        view! {
                            <li class="dropdown__item" role="menuitemcheckbox">
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || selected.get().contains(&key_for_checked)
                                        on:change=move |_| on_toggle.run(key.clone())
                                    />
                                    <span class="dropdown__item-label">{item_label}</span>
                                </label>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}

/// Button that opens a list of actions; closes after a pick
#[component]
pub fn ActionDropdown(
    /// Trigger content, e.g. a label or an icon
    trigger: ViewFn,

    #[prop(optional, into)]
    trigger_class: Option<String>,

    #[prop(optional)]
    aria_label: &'static str,

    items: Vec<DropdownItem>,

    /// Disabled dropdowns neither open nor report picks
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,

    on_select: Callback<String>,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let trigger_class = trigger_class.unwrap_or_else(|| "button button--flat button--sm".to_string());
    let is_disabled = move || disabled.get().unwrap_or(false);

    view! {
        <div class="dropdown" on:mouseleave=move |_| set_open.set(false)>
            <button
                class=trigger_class
                aria-label=aria_label
                aria-haspopup="true"
                disabled=is_disabled
                on:click=move |_| {
                    if !is_disabled() {
                        set_open.update(|v| *v = !*v);
                    }
                }
            >
                {trigger.run()}
            </button>
            <Show when=move || open.get() && !is_disabled()>
                <ul class="dropdown__menu" role="menu">
                    {items.iter().cloned().map(|(key, item_label)| {
                        view! {
                            <li
                                class="dropdown__item dropdown__item--action"
                                role="menuitem"
                                on:click=move |_| {
                                    set_open.set(false);
                                    on_select.run(key.clone());
                                }
                            >
                                {item_label}
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}
