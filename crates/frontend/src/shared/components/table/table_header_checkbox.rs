//! Select-all checkbox for a table header
//!
//! Checked when every row of the page is selected, indeterminate when only
//! some are. Toggling selects or deselects the rows of the current page.

use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

pub fn checkbox_state(page_ids: &[String], selected: &HashSet<String>) -> CheckboxState {
    if page_ids.is_empty() {
        return CheckboxState::Unchecked;
    }
    let selected_count = page_ids.iter().filter(|id| selected.contains(*id)).count();
    if selected_count == 0 {
        CheckboxState::Unchecked
    } else if selected_count == page_ids.len() {
        CheckboxState::Checked
    } else {
        CheckboxState::Indeterminate
    }
}

#[component]
pub fn TableHeaderCheckbox(
    /// Ids of the rows currently rendered
    #[prop(into)]
    page_ids: Signal<Vec<String>>,

    #[prop(into)]
    selected: Signal<HashSet<String>>,

    /// `true` = select the page, `false` = deselect it
    on_change: Callback<bool>,
) -> impl IntoView {
    let state = Signal::derive(move || checkbox_state(&page_ids.get(), &selected.get()));

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate is a DOM property only, it has no attribute
    Effect::new(move |_| {
        let is_indeterminate = matches!(state.get(), CheckboxState::Indeterminate);
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(is_indeterminate);
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                aria-label="Select page"
                prop:checked=move || matches!(state.get(), CheckboxState::Checked)
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}
