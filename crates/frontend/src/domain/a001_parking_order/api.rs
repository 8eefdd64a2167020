use contracts::domain::a001_parking_order::{ParkingOrder, UpdateOrderStatusDto};
use contracts::enums::OrderStatus;
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::shared::api_utils::{api_url, order_url};

/// Fetch the full order list
pub async fn fetch_orders() -> Result<Vec<ParkingOrder>, String> {
    let response = Request::get(&api_url("/api/order"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch orders: {}", response.status()));
    }

    response
        .json::<Vec<ParkingOrder>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete order
pub async fn delete_order(id: &str) -> Result<(), String> {
    let response = Request::delete(&order_url(id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete order: {}", response.status()));
    }

    Ok(())
}

/// Set the status of one order
pub async fn update_order_status(id: &str, status: OrderStatus) -> Result<(), String> {
    let dto = UpdateOrderStatusDto::from(status);

    let response = Request::put(&order_url(id))
        .credentials(RequestCredentials::Include)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update order: {}", response.status()));
    }

    Ok(())
}
