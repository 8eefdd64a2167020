//! Client-side query pipeline for the admin orders table
//!
//! `visible_rows` runs, in this order: text filter, status filter, page
//! slice, sort. Sorting happens after slicing, so it only reorders the rows of
//! the current page.

use contracts::domain::a001_parking_order::ParkingOrder;
use contracts::enums::OrderStatus;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

use super::columns::{OrderColumn, INITIAL_VISIBLE_COLUMNS};
use crate::shared::list_utils::{filter_list, loose_cmp, sort_list, Searchable, Sortable};

pub const ROWS_PER_PAGE_OPTIONS: [usize; 5] = [5, 10, 20, 50, 100];

/// Rows per page, restricted to [`ROWS_PER_PAGE_OPTIONS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowsPerPage(usize);

impl RowsPerPage {
    pub fn new(value: usize) -> Result<Self, String> {
        if ROWS_PER_PAGE_OPTIONS.contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!(
                "Unsupported rows per page: {} (expected one of {:?})",
                value, ROWS_PER_PAGE_OPTIONS
            ))
        }
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for RowsPerPage {
    fn default() -> Self {
        Self(ROWS_PER_PAGE_OPTIONS[0])
    }
}

/// Fields the pipeline can sort on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    CreatedAt,
    Id,
    Name,
    Quantity,
    Price,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDescriptor {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortDescriptor {
    fn default() -> Self {
        Self {
            column: SortColumn::CreatedAt,
            direction: SortDirection::Ascending,
        }
    }
}

impl Searchable for ParkingOrder {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(filter)
    }
}

impl Sortable<SortColumn> for ParkingOrder {
    fn compare_by_field(&self, other: &Self, field: SortColumn) -> Ordering {
        match field {
            SortColumn::CreatedAt => self.created_at.cmp(&other.created_at),
            SortColumn::Id => self.id.cmp(&other.id),
            SortColumn::Name => self.name.cmp(&other.name),
            SortColumn::Quantity => self.quantity.cmp(&other.quantity),
            SortColumn::Price => loose_cmp(&self.total_price, &other.total_price),
            SortColumn::Status => self.status.cmp(&other.status),
        }
    }
}

/// Ephemeral table parameters. `page` is 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub statuses: HashSet<OrderStatus>,
    pub visible_columns: BTreeSet<OrderColumn>,
    pub page: usize,
    pub rows_per_page: RowsPerPage,
    pub sort: SortDescriptor,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            statuses: HashSet::new(),
            visible_columns: INITIAL_VISIBLE_COLUMNS.into_iter().collect(),
            page: 1,
            rows_per_page: RowsPerPage::default(),
            sort: SortDescriptor::default(),
        }
    }
}

impl FilterState {
    pub fn with_rows_per_page(rows_per_page: RowsPerPage) -> Self {
        Self {
            rows_per_page,
            ..Self::default()
        }
    }

    /// New search text; returns to the first page
    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
    }

    /// New page size; returns to the first page
    pub fn set_rows_per_page(&mut self, rows_per_page: RowsPerPage) {
        self.rows_per_page = rows_per_page;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn toggle_status(&mut self, status: OrderStatus) {
        if !self.statuses.remove(&status) {
            self.statuses.insert(status);
        }
    }

    /// Shows or hides a column. The last visible column cannot be hidden.
    pub fn toggle_column(&mut self, column: OrderColumn) -> bool {
        if self.visible_columns.contains(&column) {
            if self.visible_columns.len() == 1 {
                return false;
            }
            self.visible_columns.remove(&column);
        } else {
            self.visible_columns.insert(column);
        }
        true
    }

    /// Header click: same column flips direction, another column starts ascending
    pub fn toggle_sort(&mut self, column: SortColumn) {
        if self.sort.column == column {
            self.sort.direction = self.sort.direction.toggled();
        } else {
            self.sort = SortDescriptor {
                column,
                direction: SortDirection::Ascending,
            };
        }
    }
}

/// Rows for the current page plus the numbers the pagination controls need
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryResult {
    pub rows: Vec<ParkingOrder>,
    pub filtered_count: usize,
    pub total_pages: usize,
}

impl QueryResult {
    /// Drives the "No data found" placeholder
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn text_filter(orders: Vec<ParkingOrder>, search: &str) -> Vec<ParkingOrder> {
    filter_list(orders, search)
}

pub fn status_filter(
    mut orders: Vec<ParkingOrder>,
    statuses: &HashSet<OrderStatus>,
) -> Vec<ParkingOrder> {
    if statuses.is_empty() {
        return orders;
    }
    orders.retain(|order| {
        order
            .parsed_status()
            .map(|status| statuses.contains(&status))
            .unwrap_or(false)
    });
    orders
}

pub fn total_pages(count: usize, rows_per_page: RowsPerPage) -> usize {
    count.div_ceil(rows_per_page.get())
}

/// Window `[(page-1)*rows, page*rows)`; out of range pages are empty
pub fn paginate(
    orders: Vec<ParkingOrder>,
    page: usize,
    rows_per_page: RowsPerPage,
) -> Vec<ParkingOrder> {
    let rows = rows_per_page.get();
    let start = page.saturating_sub(1).saturating_mul(rows);
    orders.into_iter().skip(start).take(rows).collect()
}

pub fn sort_page(rows: &mut [ParkingOrder], sort: SortDescriptor) {
    sort_list(rows, sort.column, sort.direction.is_ascending());
}

pub fn visible_rows(orders: &[ParkingOrder], state: &FilterState) -> QueryResult {
    let filtered = text_filter(orders.to_vec(), &state.search);
    let filtered = status_filter(filtered, &state.statuses);
    let filtered_count = filtered.len();
    let total_pages = total_pages(filtered_count, state.rows_per_page);

    let mut rows = paginate(filtered, state.page, state.rows_per_page);
    sort_page(&mut rows, state.sort);

    QueryResult {
        rows,
        filtered_count,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn order(n: usize, name: &str, status: &str, price: f64) -> ParkingOrder {
        ParkingOrder {
            id: format!("o-{:02}", n),
            name: name.to_string(),
            slot_nos: vec![format!("S{}", n)],
            quantity: 1,
            total_price: price,
            status: status.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(n as i64),
        }
    }

    fn fleet(count: usize) -> Vec<ParkingOrder> {
        (0..count)
            .map(|n| order(n, &format!("Driver {}", n), "booked", 10.0))
            .collect()
    }

    fn ids(rows: &[ParkingOrder]) -> Vec<String> {
        rows.iter().map(|o| o.id.clone()).collect()
    }

    #[test]
    fn test_text_filter_case_insensitive() {
        let orders = vec![
            order(0, "Alice Smith", "booked", 1.0),
            order(1, "BOB", "used", 1.0),
            order(2, "alice jones", "expired", 1.0),
        ];
        assert_eq!(ids(&text_filter(orders.clone(), "ALICE")), vec!["o-00", "o-02"]);
        assert_eq!(ids(&text_filter(orders.clone(), "bob")), vec!["o-01"]);
        assert_eq!(text_filter(orders.clone(), ""), orders);
        assert!(text_filter(orders, "carol").is_empty());
    }

    #[test]
    fn test_status_filter() {
        let orders = vec![
            order(0, "a", "booked", 1.0),
            order(1, "b", "Used", 1.0),
            order(2, "c", "expired", 1.0),
            order(3, "d", "unknown", 1.0),
        ];
        assert_eq!(status_filter(orders.clone(), &HashSet::new()), orders);

        let selected: HashSet<_> = [OrderStatus::Used, OrderStatus::Expired].into_iter().collect();
        assert_eq!(ids(&status_filter(orders, &selected)), vec!["o-01", "o-02"]);
    }

    #[test]
    fn test_pagination_windows() {
        let rows = RowsPerPage::new(5).unwrap();
        let orders = fleet(12);
        assert_eq!(total_pages(orders.len(), rows), 3);
        assert_eq!(ids(&paginate(orders.clone(), 1, rows)), ids(&orders[0..5]));
        assert_eq!(ids(&paginate(orders.clone(), 3, rows)), ids(&orders[10..12]));
        assert!(paginate(orders, 4, rows).is_empty());
    }

    #[test]
    fn test_rows_per_page_is_restricted() {
        for value in ROWS_PER_PAGE_OPTIONS {
            assert_eq!(RowsPerPage::new(value).unwrap().get(), value);
        }
        assert!(RowsPerPage::new(7).is_err());
        assert!(RowsPerPage::new(0).is_err());
    }

    #[test]
    fn test_sort_by_price_within_page() {
        let mut rows = vec![
            order(0, "a", "booked", 30.0),
            order(1, "b", "booked", 10.0),
            order(2, "c", "booked", 20.0),
        ];
        sort_page(&mut rows, SortDescriptor { column: SortColumn::Price, direction: SortDirection::Ascending });
        let prices: Vec<_> = rows.iter().map(|o| o.total_price).collect();
        assert_eq!(prices, vec![10.0, 20.0, 30.0]);

        sort_page(&mut rows, SortDescriptor { column: SortColumn::Price, direction: SortDirection::Descending });
        let prices: Vec<_> = rows.iter().map(|o| o.total_price).collect();
        assert_eq!(prices, vec![30.0, 20.0, 10.0]);
    }

    #[test]
    fn test_sort_only_reorders_current_page() {
        // Prices fall as the list goes on, so a global sort would pull the
        // cheapest orders (from the last page) onto page 1.
        let orders: Vec<_> = (0..10)
            .map(|n| order(n, &format!("Driver {}", n), "booked", (100 - n) as f64))
            .collect();
        let mut state = FilterState::with_rows_per_page(RowsPerPage::new(5).unwrap());
        state.sort = SortDescriptor { column: SortColumn::Price, direction: SortDirection::Ascending };

        let result = visible_rows(&orders, &state);
        assert_eq!(ids(&result.rows), vec!["o-04", "o-03", "o-02", "o-01", "o-00"]);
        assert_eq!(result.total_pages, 2);
    }

    #[test]
    fn test_visible_rows_full_pipeline() {
        let mut orders = fleet(12);
        orders[3].status = "used".to_string();
        orders[7].status = "used".to_string();
        orders[11].status = "used".to_string();

        let mut state = FilterState::default();
        state.toggle_status(OrderStatus::Used);
        state.set_search("driver 1".to_string());

        // "driver 1" matches Driver 1, 10, 11; of those only 11 is used.
        let result = visible_rows(&orders, &state);
        assert_eq!(ids(&result.rows), vec!["o-11"]);
        assert_eq!(result.filtered_count, 1);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn test_empty_input_reports_no_data() {
        let result = visible_rows(&[], &FilterState::default());
        assert!(result.is_empty());
        assert_eq!(result.total_pages, 0);
    }

    #[test]
    fn test_default_sort_is_created_at_ascending() {
        let mut orders = fleet(3);
        orders.reverse();
        let result = visible_rows(&orders, &FilterState::default());
        assert_eq!(ids(&result.rows), vec!["o-00", "o-01", "o-02"]);
    }

    #[test]
    fn test_search_and_page_size_reset_page() {
        let mut state = FilterState::default();
        state.set_page(3);
        state.set_search("x".to_string());
        assert_eq!(state.page, 1);

        state.set_page(4);
        state.set_rows_per_page(RowsPerPage::new(20).unwrap());
        assert_eq!(state.page, 1);

        state.set_page(2);
        state.toggle_status(OrderStatus::Booked);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_toggle_sort() {
        let mut state = FilterState::default();
        state.toggle_sort(SortColumn::Name);
        assert_eq!(state.sort, SortDescriptor { column: SortColumn::Name, direction: SortDirection::Ascending });
        state.toggle_sort(SortColumn::Name);
        assert_eq!(state.sort.direction, SortDirection::Descending);
        state.toggle_sort(SortColumn::Status);
        assert_eq!(state.sort, SortDescriptor { column: SortColumn::Status, direction: SortDirection::Ascending });
    }

    #[test]
    fn test_last_visible_column_stays() {
        let mut state = FilterState::default();
        assert!(state.toggle_column(OrderColumn::Name));
        assert!(state.toggle_column(OrderColumn::Status));
        assert!(!state.toggle_column(OrderColumn::Actions));
        assert_eq!(state.visible_columns.len(), 1);
        assert!(state.toggle_column(OrderColumn::Price));
        assert_eq!(state.visible_columns.len(), 2);
    }
}
