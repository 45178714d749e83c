//! Product-unit service: sellable variants of a product (SKU, price, stock).
//!
//! Units are created under their product; updates and deletes address the
//! unit directly. JSON everywhere.

use serde::{Deserialize, Serialize};
use techmart_core::diff::PatchSet;
use techmart_core::EntityId;
use validator::Validate;

use crate::body::RequestBody;
use crate::error::ClientResult;
use crate::gateway::{Gateway, Method};

/// A product unit as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUnit {
    pub id: EntityId,
    pub product_id: EntityId,
    pub sku: String,
    /// Unit price in VND.
    pub price: i64,
    pub stock_quantity: i64,
}

/// Fields the create form submits.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductUnit {
    #[validate(length(min = 1, message = "Vui lòng nhập mã SKU"))]
    pub sku: String,
    #[validate(range(min = 0))]
    pub price: i64,
    #[validate(range(min = 0))]
    pub stock_quantity: i64,
}

/// CRUD calls for product units.
#[derive(Debug, Clone)]
pub struct ProductUnitService {
    gateway: Gateway,
}

impl ProductUnitService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn create(&self, product_id: &str, data: &CreateProductUnit) -> ClientResult<ProductUnit> {
        data.validate()?;
        self.gateway
            .expect(
                Method::POST,
                &format!("/products/{product_id}/units"),
                RequestBody::json(data)?,
            )
            .await
    }

    /// Partial update; the patch becomes the JSON body as-is.
    pub async fn update(&self, id: &str, patch: PatchSet) -> ClientResult<ProductUnit> {
        self.gateway
            .expect(
                Method::PUT,
                &format!("/product-units/{id}"),
                RequestBody::Json(serde_json::Value::Object(patch.into_fields())),
            )
            .await
    }

    pub async fn get_by_product(&self, product_id: &str) -> ClientResult<Vec<ProductUnit>> {
        self.gateway
            .get(&format!("/products/{product_id}/units"))
            .await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.gateway
            .ack(
                Method::DELETE,
                &format!("/product-units/{id}"),
                RequestBody::Empty,
            )
            .await
    }
}
