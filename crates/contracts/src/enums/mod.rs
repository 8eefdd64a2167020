pub mod order_status;

pub use order_status::{capitalize, status_style, OrderStatus, StatusColor};
