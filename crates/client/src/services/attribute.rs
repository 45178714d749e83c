//! Attribute service: named product specification keys (CPU, RAM, ...).
//!
//! No endpoint here ever carries a file, so everything is JSON.

use serde::{Deserialize, Serialize};
use techmart_core::diff::PatchSet;
use techmart_core::EntityId;
use validator::Validate;

use crate::body::RequestBody;
use crate::error::ClientResult;
use crate::gateway::{Gateway, Method};

/// An attribute as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub id: EntityId,
    pub attribute_name: String,
}

/// Fields the create form submits.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttribute {
    #[validate(length(min = 1, message = "Vui lòng nhập tên thuộc tính"))]
    pub attribute_name: String,
}

/// CRUD calls for `/attributes`.
#[derive(Debug, Clone)]
pub struct AttributeService {
    gateway: Gateway,
}

impl AttributeService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn create(&self, data: &CreateAttribute) -> ClientResult<Attribute> {
        data.validate()?;
        self.gateway
            .expect(Method::POST, "/attributes", RequestBody::json(data)?)
            .await
    }

    /// Partial update; the patch becomes the JSON body as-is.
    pub async fn update(&self, id: &str, patch: PatchSet) -> ClientResult<Attribute> {
        self.gateway
            .expect(
                Method::PUT,
                &format!("/attributes/{id}"),
                RequestBody::Json(serde_json::Value::Object(patch.into_fields())),
            )
            .await
    }

    pub async fn get_all(&self) -> ClientResult<Vec<Attribute>> {
        self.gateway.get("/attributes").await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.gateway
            .ack(
                Method::DELETE,
                &format!("/attributes/{id}"),
                RequestBody::Empty,
            )
            .await
    }
}
