//! Category service: top-level catalog sections with an icon image.
//!
//! Creation requires an icon file (the form blocks submission without one,
//! see `techmart_core::validation::require_file`). Updates are multipart
//! partial updates; moving a sub-category under a different parent is just a
//! `parentId` entry in the patch, flagged on the edit session as a reference
//! change.

use serde::{Deserialize, Serialize};
use techmart_core::diff::PatchSet;
use techmart_core::edit::FileAttachment;
use techmart_core::EntityId;
use validator::Validate;

use crate::body::RequestBody;
use crate::error::ClientResult;
use crate::gateway::{Gateway, Method};
use crate::services::defined_fields;

/// A product category as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: EntityId,
    pub category_name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// URL of the stored icon asset.
    #[serde(default)]
    pub icon_url: Option<String>,
    /// Parent category for sub-categories.
    #[serde(default)]
    pub parent_id: Option<EntityId>,
}

/// Fields the create form submits.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategory {
    #[validate(length(min = 2, message = "Tên danh mục phải có ít nhất 2 ký tự"))]
    pub category_name: String,
    pub description: Option<String>,
    pub parent_id: Option<EntityId>,
}

/// CRUD calls for `/categories`.
#[derive(Debug, Clone)]
pub struct CategoryService {
    gateway: Gateway,
}

impl CategoryService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Create a category. The icon file is mandatory at this endpoint.
    pub async fn create(&self, data: &CreateCategory, icon: FileAttachment) -> ClientResult<Category> {
        data.validate()?;
        let fields = defined_fields(data)?;
        self.gateway
            .expect(
                Method::POST,
                "/categories",
                RequestBody::form(fields, Some(icon)),
            )
            .await
    }

    /// Partial update with only the changed fields; a new icon rides along
    /// unconditionally when chosen.
    pub async fn update(
        &self,
        id: &str,
        patch: PatchSet,
        icon: Option<FileAttachment>,
    ) -> ClientResult<Category> {
        self.gateway
            .expect(
                Method::PUT,
                &format!("/categories/{id}"),
                RequestBody::form(patch, icon),
            )
            .await
    }

    pub async fn get_all(&self) -> ClientResult<Vec<Category>> {
        self.gateway.get("/categories").await
    }

    pub async fn get_by_id(&self, id: &str) -> ClientResult<Category> {
        self.gateway.get(&format!("/categories/{id}")).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.gateway
            .ack(
                Method::DELETE,
                &format!("/categories/{id}"),
                RequestBody::Empty,
            )
            .await
    }
}
