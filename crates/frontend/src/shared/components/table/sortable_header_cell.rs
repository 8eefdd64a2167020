//! Clickable table header with a sort indicator

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Whether the table is currently sorted by this column
    #[prop(into)]
    is_current: Signal<bool>,

    #[prop(into)]
    sort_ascending: Signal<bool>,

    on_sort: Callback<()>,

    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(())
            >
                {label}
                <span class=move || get_sort_class(is_current.get())>
                    {move || get_sort_indicator(is_current.get(), sort_ascending.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}
