use contracts::domain::a001_parking_order::ParkingOrder;
use leptos::prelude::*;

use crate::domain::a001_parking_order::query::{FilterState, RowsPerPage};
use crate::shared::config::config;

#[derive(Clone, Debug)]
pub struct OrdersListState {
    /// Last fetched order list
    pub orders: Vec<ParkingOrder>,
    pub filter: FilterState,
    pub is_loaded: bool,
}

impl Default for OrdersListState {
    fn default() -> Self {
        let rows_per_page = RowsPerPage::new(config().orders.default_rows_per_page)
            .unwrap_or_else(|e| {
                log::warn!("{}; falling back to {}", e, RowsPerPage::default().get());
                RowsPerPage::default()
            });
        Self {
            orders: Vec::new(),
            filter: FilterState::with_rows_per_page(rows_per_page),
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<OrdersListState> {
    RwSignal::new(OrdersListState::default())
}
