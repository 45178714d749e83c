//! Order service: reads plus the status transitions behind the order
//! preparation workflow. The checklist UI is a convenience over
//! [`OrderService::update_status`]; nothing else mutates an order from the
//! dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use techmart_core::EntityId;

use crate::body::RequestBody;
use crate::error::ClientResult;
use crate::gateway::{Gateway, Method};

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Query-string / wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Preparing => "PREPARING",
            Self::Shipped => "SHIPPED",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// One line of an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_unit_id: EntityId,
    pub quantity: i64,
    /// Price per unit at order time, in VND.
    pub unit_price: i64,
}

/// An order as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: EntityId,
    pub customer_name: String,
    pub status: OrderStatus,
    /// Order total in VND.
    pub total: i64,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
}

/// Calls for `/orders`.
#[derive(Debug, Clone)]
pub struct OrderService {
    gateway: Gateway,
}

impl OrderService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// All orders, optionally filtered by status.
    pub async fn get_all(&self, status: Option<OrderStatus>) -> ClientResult<Vec<Order>> {
        let path = match status {
            Some(status) => format!("/orders?status={}", status.as_str()),
            None => "/orders".to_string(),
        };
        self.gateway.get(&path).await
    }

    pub async fn get_by_id(&self, id: &str) -> ClientResult<Order> {
        self.gateway.get(&format!("/orders/{id}")).await
    }

    /// Move an order to a new status, returning the updated order.
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> ClientResult<Order> {
        let body = serde_json::json!({ "status": status });
        self.gateway
            .expect(
                Method::PUT,
                &format!("/orders/{id}/status"),
                RequestBody::Json(body),
            )
            .await
    }
}
