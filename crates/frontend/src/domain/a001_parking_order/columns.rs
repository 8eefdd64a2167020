use contracts::domain::a001_parking_order::ParkingOrder;
use contracts::enums::{status_style, StatusColor};
use std::collections::BTreeSet;

use super::query::SortColumn;

/// Columns of the admin orders table, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrderColumn {
    Id,
    Name,
    SlotNo,
    Quantity,
    Price,
    Status,
    Actions,
}

pub const INITIAL_VISIBLE_COLUMNS: [OrderColumn; 3] =
    [OrderColumn::Name, OrderColumn::Status, OrderColumn::Actions];

impl OrderColumn {
    pub fn all() -> [OrderColumn; 7] {
        [
            OrderColumn::Id,
            OrderColumn::Name,
            OrderColumn::SlotNo,
            OrderColumn::Quantity,
            OrderColumn::Price,
            OrderColumn::Status,
            OrderColumn::Actions,
        ]
    }

    pub fn uid(&self) -> &'static str {
        match self {
            OrderColumn::Id => "id",
            OrderColumn::Name => "name",
            OrderColumn::SlotNo => "slotNo",
            OrderColumn::Quantity => "quantity",
            OrderColumn::Price => "price",
            OrderColumn::Status => "status",
            OrderColumn::Actions => "actions",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderColumn::Id => "ID",
            OrderColumn::Name => "NAME",
            OrderColumn::SlotNo => "SLOT NO",
            OrderColumn::Quantity => "QUANTITY",
            OrderColumn::Price => "PRICE",
            OrderColumn::Status => "STATUS",
            OrderColumn::Actions => "ACTIONS",
        }
    }

    /// Sort key behind the header, `None` for columns without a sort control
    pub fn sort_column(&self) -> Option<SortColumn> {
        match self {
            OrderColumn::Id => Some(SortColumn::Id),
            OrderColumn::Name => Some(SortColumn::Name),
            OrderColumn::Status => Some(SortColumn::Status),
            OrderColumn::SlotNo
            | OrderColumn::Quantity
            | OrderColumn::Price
            | OrderColumn::Actions => None,
        }
    }

    pub fn is_centered(&self) -> bool {
        matches!(self, OrderColumn::Actions)
    }

    pub fn from_uid(uid: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.uid() == uid)
    }
}

/// Visible columns in display order
pub fn header_columns(visible: &BTreeSet<OrderColumn>) -> Vec<OrderColumn> {
    OrderColumn::all()
        .into_iter()
        .filter(|c| visible.contains(c))
        .collect()
}

/// What a cell shows, independent of how it is drawn
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Text(String),
    Badge { label: String, color: StatusColor },
    /// View / Edit / Delete menu for the given order id
    Actions(String),
}

pub fn cell_content(column: OrderColumn, order: &ParkingOrder) -> CellContent {
    match column {
        OrderColumn::Id => CellContent::Text(order.id.clone()),
        OrderColumn::Name => CellContent::Text(order.name.clone()),
        OrderColumn::SlotNo => CellContent::Text(order.slots_display()),
        OrderColumn::Quantity => CellContent::Text(order.quantity.to_string()),
        OrderColumn::Price => CellContent::Text(order.price_display()),
        OrderColumn::Status => {
            let (label, color) = status_style(&order.status);
            CellContent::Badge { label, color }
        }
        OrderColumn::Actions => CellContent::Actions(order.id.clone()),
    }
}
