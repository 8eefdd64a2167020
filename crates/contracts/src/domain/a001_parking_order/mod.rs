pub mod aggregate;

pub use aggregate::{ParkingOrder, UpdateOrderStatusDto};
