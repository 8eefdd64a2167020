use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::OrderStatus;

// ============================================================================
// Aggregate
// ============================================================================

/// Parking-slot reservation as returned by `GET /api/order`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingOrder {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    pub name: String,

    #[serde(rename = "slotNos")]
    pub slot_nos: Vec<String>,

    pub quantity: u32,

    #[serde(rename = "totalPrice")]
    pub total_price: f64,

    /// Raw status string; see [`ParkingOrder::parsed_status`]
    pub status: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl ParkingOrder {
    pub fn parsed_status(&self) -> Option<OrderStatus> {
        OrderStatus::from_code(&self.status)
    }

    /// Slot numbers as a single display string, e.g. `"A1, A2"`
    pub fn slots_display(&self) -> String {
        self.slot_nos.join(", ")
    }

    /// Price formatted as `$12.50`
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.total_price)
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Body of `PUT /api/order/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOrderStatusDto {
    pub status: String,
}

impl From<OrderStatus> for UpdateOrderStatusDto {
    fn from(status: OrderStatus) -> Self {
        Self {
            status: status.code().to_string(),
        }
    }
}
