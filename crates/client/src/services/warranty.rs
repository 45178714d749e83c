//! Warranty service: warranty records tied to a sold product unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use techmart_core::diff::PatchSet;
use techmart_core::EntityId;
use validator::Validate;

use crate::body::RequestBody;
use crate::error::ClientResult;
use crate::gateway::{Gateway, Method};

/// Warranty state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarrantyStatus {
    Active,
    Claimed,
    Expired,
}

/// A warranty record as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warranty {
    pub id: EntityId,
    pub product_unit_id: EntityId,
    pub customer_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: WarrantyStatus,
}

/// Fields the create form submits.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWarranty {
    pub product_unit_id: EntityId,
    #[validate(length(min = 2, message = "Vui lòng nhập tên khách hàng"))]
    pub customer_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// CRUD calls for `/warranties`.
#[derive(Debug, Clone)]
pub struct WarrantyService {
    gateway: Gateway,
}

impl WarrantyService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn create(&self, data: &CreateWarranty) -> ClientResult<Warranty> {
        data.validate()?;
        self.gateway
            .expect(Method::POST, "/warranties", RequestBody::json(data)?)
            .await
    }

    /// Partial update; the patch becomes the JSON body as-is.
    pub async fn update(&self, id: &str, patch: PatchSet) -> ClientResult<Warranty> {
        self.gateway
            .expect(
                Method::PUT,
                &format!("/warranties/{id}"),
                RequestBody::Json(serde_json::Value::Object(patch.into_fields())),
            )
            .await
    }

    pub async fn get_all(&self) -> ClientResult<Vec<Warranty>> {
        self.gateway.get("/warranties").await
    }

    pub async fn get_by_id(&self, id: &str) -> ClientResult<Warranty> {
        self.gateway.get(&format!("/warranties/{id}")).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.gateway
            .ack(
                Method::DELETE,
                &format!("/warranties/{id}"),
                RequestBody::Empty,
            )
            .await
    }
}
