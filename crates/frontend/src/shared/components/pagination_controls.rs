use crate::shared::icons::icon;
use leptos::prelude::*;

/// Pager with first/prev/next/last buttons and a rows-per-page select
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages, 0 when there is nothing to show
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items after filtering
    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,

    page_size_options: Vec<usize>,
) -> impl IntoView {
    let is_first = move || current_page.get() <= 1;
    let is_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <label class="pagination-size">
                <span class="pagination-size__label">"Rows per page:"</span>
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        match event_target_value(&ev).parse::<usize>() {
                            Ok(size) => on_page_size_change.run(size),
                            Err(e) => log::warn!("Ignoring page size selection: {}", e),
                        }
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {page_size_options.iter().map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>

            <div class="pagination-pager">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(1)
                    disabled=is_first
                    title="First page"
                >
                    {icon("chevrons-left")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=is_first
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                <span class="pagination-info">
                    {move || {
                        format!(
                            "{} / {} ({})",
                            current_page.get(),
                            total_pages.get().max(1),
                            total_count.get()
                        )
                    }}
                </span>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page < total_pages.get() {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=is_last
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let total = total_pages.get();
                        if total > 0 {
                            on_page_change.run(total);
                        }
                    }
                    disabled=is_last
                    title="Last page"
                >
                    {icon("chevrons-right")}
                </button>
            </div>
        </div>
    }
}
