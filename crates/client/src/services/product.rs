//! Product service: the catalog items themselves.

use serde::{Deserialize, Serialize};
use techmart_core::diff::PatchSet;
use techmart_core::edit::FileAttachment;
use techmart_core::EntityId;
use validator::Validate;

use crate::body::RequestBody;
use crate::error::ClientResult;
use crate::gateway::{Gateway, Method};
use crate::services::defined_fields;

/// Sale status of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    Active,
    OutOfStock,
    Discontinued,
}

/// A product as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    pub product_name: String,
    /// Listed price in VND.
    pub price: i64,
    #[serde(default)]
    pub description: Option<String>,
    pub category_id: EntityId,
    pub brand_id: EntityId,
    pub status: ProductStatus,
}

/// Fields the create form submits. The cover image is optional; product
/// gallery images go through the product-image service instead.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(length(min = 2, message = "Tên sản phẩm phải có ít nhất 2 ký tự"))]
    pub product_name: String,
    #[validate(range(min = 0))]
    pub price: i64,
    pub description: Option<String>,
    pub category_id: EntityId,
    pub brand_id: EntityId,
}

/// CRUD calls for `/products`.
#[derive(Debug, Clone)]
pub struct ProductService {
    gateway: Gateway,
}

impl ProductService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn create(
        &self,
        data: &CreateProduct,
        cover: Option<FileAttachment>,
    ) -> ClientResult<Product> {
        data.validate()?;
        let fields = defined_fields(data)?;
        self.gateway
            .expect(Method::POST, "/products", RequestBody::form(fields, cover))
            .await
    }

    /// Partial update with only the changed fields.
    pub async fn update(
        &self,
        id: &str,
        patch: PatchSet,
        cover: Option<FileAttachment>,
    ) -> ClientResult<Product> {
        self.gateway
            .expect(
                Method::PUT,
                &format!("/products/{id}"),
                RequestBody::form(patch, cover),
            )
            .await
    }

    pub async fn get_all(&self) -> ClientResult<Vec<Product>> {
        self.gateway.get("/products").await
    }

    pub async fn get_by_category(&self, category_id: &str) -> ClientResult<Vec<Product>> {
        self.gateway
            .get(&format!("/categories/{category_id}/products"))
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> ClientResult<Product> {
        self.gateway.get(&format!("/products/{id}")).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.gateway
            .ack(
                Method::DELETE,
                &format!("/products/{id}"),
                RequestBody::Empty,
            )
            .await
    }
}
