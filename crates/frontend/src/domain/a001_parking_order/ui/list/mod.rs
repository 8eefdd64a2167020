mod state;

use contracts::domain::a001_parking_order::ParkingOrder;
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use std::collections::HashSet;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use crate::domain::a001_parking_order::actions::{
    delete_one, delete_selected, set_status_for_selected, ActionGate, ActionOutcome,
    BrowserPrompt, HttpOrdersBackend,
};
use crate::domain::a001_parking_order::api;
use crate::domain::a001_parking_order::columns::{cell_content, header_columns, CellContent, OrderColumn};
use crate::domain::a001_parking_order::query::{visible_rows, RowsPerPage, ROWS_PER_PAGE_OPTIONS};
use crate::shared::components::dropdown::{ActionDropdown, DropdownItem, MultiSelectDropdown};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::components::ui::Badge;
use crate::shared::config::{config, BulkSelectionPolicy};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::system::auth::context::SessionContext;
use crate::system::auth::guard::RequireAdmin;
use state::create_state;

const TABLE_ID: &str = "admin-orders-table";

#[component]
pub fn OrdersListPage(session: SessionContext) -> impl IntoView {
    view! {
        <RequireAdmin session=session>
            <OrdersList />
        </RequireAdmin>
    }
}

fn status_options() -> Vec<DropdownItem> {
    OrderStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect()
}

fn column_options() -> Vec<DropdownItem> {
    OrderColumn::all()
        .into_iter()
        .map(|c| (c.uid().to_string(), c.label().to_string()))
        .collect()
}

fn row_action_items() -> Vec<DropdownItem> {
    vec![
        ("view".to_string(), "View".to_string()),
        ("edit".to_string(), "Edit".to_string()),
        ("delete".to_string(), "Delete".to_string()),
    ]
}

/// What a finished action applies to
#[derive(Clone, Copy, PartialEq, Eq)]
enum ActionScope {
    /// One row from its menu; only that row leaves the selection
    Row,
    /// The checked rows; the configured selection policy applies
    Selection,
}

/// Selection in a stable order so bulk requests go out deterministically
fn sorted_ids(selection: &HashSet<String>) -> Vec<String> {
    let mut ids: Vec<String> = selection.iter().cloned().collect();
    ids.sort();
    ids
}

#[component]
fn OrdersList() -> impl IntoView {
    let state = create_state();
    let selected: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let gate = RwSignal::new(ActionGate::default());
    let busy = Signal::derive(move || gate.with(ActionGate::is_busy));
    let policy = config().orders.bulk_selection_policy;

    let navigate = StoredValue::new_local(use_navigate());
    let open_route = move |path: String| navigate.with_value(|nav| nav(&path, Default::default()));

    let result = Memo::new(move |_| state.with(|s| visible_rows(&s.orders, &s.filter)));

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_orders().await {
                Ok(data) => {
                    log::debug!("Loaded {} orders", data.len());
                    state.update(|s| {
                        s.orders = data;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("Failed to load orders: {}", e);
                    set_error.set(Some(format!("Failed to load orders: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let begin_action = move || {
        let mut started = false;
        gate.update(|g| started = g.try_begin());
        if !started {
            log::warn!("Another order action is still running, ignoring");
        }
        started
    };

    // Selection and refresh are decided from the returned outcome
    let finish_action = move |outcome: ActionOutcome, scope: ActionScope| {
        if let Some(bulk) = outcome.bulk() {
            selected.update(|sel| match scope {
                ActionScope::Row => bulk.deselect_succeeded(sel),
                ActionScope::Selection => bulk.apply_to_selection(sel, policy),
            });
            if policy == BulkSelectionPolicy::KeepFailed && !bulk.all_succeeded() {
                set_error.set(Some(format!(
                    "{} of {} requests failed",
                    bulk.failed.len(),
                    bulk.attempted()
                )));
            }
        }
        if outcome.needs_refresh() {
            load_data();
        }
        gate.update(ActionGate::finish);
    };

    let run_delete_one = move |id: String| {
        if !begin_action() {
            return;
        }
        spawn_local(async move {
            let outcome = delete_one(&HttpOrdersBackend, &BrowserPrompt, &id).await;
            finish_action(outcome, ActionScope::Row);
        });
    };

    let run_delete_selected = move || {
        if !begin_action() {
            return;
        }
        let ids = sorted_ids(&selected.get_untracked());
        spawn_local(async move {
            let outcome = delete_selected(&HttpOrdersBackend, &BrowserPrompt, &ids).await;
            finish_action(outcome, ActionScope::Selection);
        });
    };

    let run_set_status = move |code: String| {
        let Some(status) = OrderStatus::from_code(&code) else {
            log::warn!("Unknown status selected: {}", code);
            return;
        };
        if !begin_action() {
            return;
        }
        let ids = sorted_ids(&selected.get_untracked());
        spawn_local(async move {
            let outcome =
                set_status_for_selected(&HttpOrdersBackend, &BrowserPrompt, &ids, status, policy)
                    .await;
            finish_action(outcome, ActionScope::Selection);
        });
    };

    let on_row_action = Callback::new(move |(action, id): (String, String)| match action.as_str() {
        "view" => open_route(format!("/order/view/{}", id)),
        "edit" => open_route(format!("/order/edit/{}", id)),
        "delete" => run_delete_one(id),
        other => log::warn!("Unknown row action: {}", other),
    });

    let on_search = Callback::new(move |value: String| {
        state.update(|s| s.filter.set_search(value));
    });

    let on_toggle_status = Callback::new(move |code: String| match OrderStatus::from_code(&code) {
        Some(status) => state.update(|s| s.filter.toggle_status(status)),
        None => log::warn!("Unknown status filter: {}", code),
    });

    let on_toggle_column = Callback::new(move |uid: String| match OrderColumn::from_uid(&uid) {
        Some(column) => state.update(|s| {
            if !s.filter.toggle_column(column) {
                log::debug!("Keeping last visible column {}", uid);
            }
        }),
        None => log::warn!("Unknown column: {}", uid),
    });

    let go_to_page = move |page: usize| state.update(|s| s.filter.set_page(page));

    let change_page_size = move |size: usize| match RowsPerPage::new(size) {
        Ok(rows) => state.update(|s| s.filter.set_rows_per_page(rows)),
        Err(e) => log::warn!("{}", e),
    };

    let toggle_selection = move |id: String, checked: bool| {
        selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    };

    let page_ids = Signal::derive(move || {
        result.with(|r| r.rows.iter().map(|o| o.id.clone()).collect::<Vec<_>>())
    });
    let selected_signal = Signal::derive(move || selected.get());

    let toggle_page = move |check_all: bool| {
        let ids = page_ids.get_untracked();
        selected.update(|s| {
            for id in ids {
                if check_all {
                    s.insert(id);
                } else {
                    s.remove(&id);
                }
            }
        });
    };

    let search_value = Signal::derive(move || state.with(|s| s.filter.search.clone()));
    let visible_columns = Memo::new(move |_| state.with(|s| s.filter.visible_columns.clone()));
    let selected_statuses = Signal::derive(move || {
        state.with(|s| {
            s.filter
                .statuses
                .iter()
                .map(|st| st.code().to_string())
                .collect::<HashSet<_>>()
        })
    });
    let selected_columns = Signal::derive(move || {
        visible_columns.with(|cols| cols.iter().map(|c| c.uid().to_string()).collect::<HashSet<_>>())
    });

    view! {
        <div class="page" id="admin_orders--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Orders"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="table-toolbar">
                    <SearchInput
                        value=search_value
                        on_change=on_search
                        placeholder="Search by name..."
                    />
                    <div class="table-toolbar__actions">
                        <MultiSelectDropdown
                            label="Status"
                            options=status_options()
                            selected=selected_statuses
                            on_toggle=on_toggle_status
                        />
                        <MultiSelectDropdown
                            label="Columns"
                            options=column_options()
                            selected=selected_columns
                            on_toggle=on_toggle_column
                        />
                        <Show when=move || !selected.with(|s| s.is_empty())>
                            <ActionDropdown
                                trigger=ViewFn::from(|| view! { "Set status" {icon("chevron-down")} })
                                items=status_options()
                                disabled=busy
                                on_select=Callback::new(run_set_status)
                            />
                            <Button
                                appearance=ButtonAppearance::Primary
                                class="button--danger"
                                on_click=move |_| run_delete_selected()
                                disabled=busy
                            >
                                {icon("delete")}
                                {move || format!(" Delete ({})", selected.with(|s| s.len()))}
                            </Button>
                        </Show>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id=TABLE_ID attr:aria-label="Orders table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    page_ids=page_ids
                                    selected=selected_signal
                                    on_change=Callback::new(toggle_page)
                                />
                                {move || {
                                    header_columns(&visible_columns.get())
                                        .into_iter()
                                        .map(|column| header_cell(column, state))
                                        .collect_view()
                                }}
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || {
                                let columns = header_columns(&visible_columns.get());
                                let search = search_value.get();
                                let rows = result.with(|r| r.rows.clone());
                                if rows.is_empty() {
                                    let colspan = (columns.len() + 1).to_string();
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan=colspan>
                                                <div class="table__empty">"No data found"</div>
                                            </TableCell>
                                        </TableRow>
                                    }.into_any();
                                }
                                rows.into_iter()
                                    .map(|order| order_row(
                                        order,
                                        &columns,
                                        &search,
                                        selected_signal,
                                        Callback::new(move |(id, checked)| toggle_selection(id, checked)),
                                        on_row_action,
                                    ))
                                    .collect_view()
                                    .into_any()
                            }}
                        </TableBody>
                    </Table>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.filter.page))
                    total_pages=Signal::derive(move || result.with(|r| r.total_pages))
                    total_count=Signal::derive(move || result.with(|r| r.filtered_count))
                    page_size=Signal::derive(move || state.with(|s| s.filter.rows_per_page.get()))
                    on_page_change=Callback::new(go_to_page)
                    on_page_size_change=Callback::new(change_page_size)
                    page_size_options=ROWS_PER_PAGE_OPTIONS.to_vec()
                />
            </div>
        </div>
    }
}

fn header_cell(column: OrderColumn, state: RwSignal<state::OrdersListState>) -> AnyView {
    match column.sort_column() {
        Some(sort_column) => view! {
            <SortableHeaderCell
                label=column.label()
                is_current=Signal::derive(move || state.with(|s| s.filter.sort.column == sort_column))
                sort_ascending=Signal::derive(move || state.with(|s| s.filter.sort.direction.is_ascending()))
                on_sort=Callback::new(move |_| state.update(|s| s.filter.toggle_sort(sort_column)))
            />
        }
        .into_any(),
        None => {
            let class = if column.is_centered() { "table__header--center" } else { "" };
            view! {
                <TableHeaderCell resizable=false class=class>
                    {column.label()}
                </TableHeaderCell>
            }
            .into_any()
        }
    }
}

fn order_row(
    order: ParkingOrder,
    columns: &[OrderColumn],
    search: &str,
    selected: Signal<HashSet<String>>,
    on_select: Callback<(String, bool)>,
    on_action: Callback<(String, String)>,
) -> impl IntoView {
    let cells = columns
        .iter()
        .map(|&column| render_cell(column, &order, search, on_action))
        .collect_view();

    view! {
        <TableRow>
            <TableCellCheckbox item_id=order.id.clone() selected=selected on_change=on_select />
            {cells}
        </TableRow>
    }
}

fn render_cell(
    column: OrderColumn,
    order: &ParkingOrder,
    search: &str,
    on_action: Callback<(String, String)>,
) -> AnyView {
    let content = match cell_content(column, order) {
        CellContent::Text(text) if column == OrderColumn::Name => highlight_matches(&text, search),
        CellContent::Text(text) => view! { <span>{text}</span> }.into_any(),
        CellContent::Badge { label, color } => view! { <Badge color=color>{label}</Badge> }.into_any(),
        CellContent::Actions(id) => view! {
            <div class="table__row-actions">
                <ActionDropdown
                    trigger=ViewFn::from(|| icon("more-vertical"))
                    trigger_class="button button--icon button--light"
                    aria_label="Order actions"
                    items=row_action_items()
                    on_select=Callback::new(move |action: String| on_action.run((action, id.clone())))
                />
            </div>
        }
        .into_any(),
    };

    view! {
        <TableCell>
            <TableCellLayout truncate=true>{content}</TableCellLayout>
        </TableCell>
    }
    .into_any()
}
