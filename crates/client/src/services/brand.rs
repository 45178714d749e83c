//! Brand service: manufacturers scoped under a category.
//!
//! Brands are created under their parent category
//! (`POST /categories/{category_id}/brands`); the logo is optional on both
//! create and update.

use serde::{Deserialize, Serialize};
use techmart_core::diff::PatchSet;
use techmart_core::edit::FileAttachment;
use techmart_core::EntityId;
use validator::Validate;

use crate::body::RequestBody;
use crate::error::ClientResult;
use crate::gateway::{Gateway, Method};
use crate::services::defined_fields;

/// A brand as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: EntityId,
    pub brand_name: String,
    pub category_id: EntityId,
    /// URL of the stored logo asset.
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Fields the create form submits.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrand {
    #[validate(length(min = 2, message = "Tên thương hiệu phải có ít nhất 2 ký tự"))]
    pub brand_name: String,
    pub description: Option<String>,
}

/// CRUD calls for `/brands`.
#[derive(Debug, Clone)]
pub struct BrandService {
    gateway: Gateway,
}

impl BrandService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Create a brand under a parent category.
    pub async fn create(
        &self,
        category_id: &str,
        data: &CreateBrand,
        logo: Option<FileAttachment>,
    ) -> ClientResult<Brand> {
        data.validate()?;
        let fields = defined_fields(data)?;
        self.gateway
            .expect(
                Method::POST,
                &format!("/categories/{category_id}/brands"),
                RequestBody::form(fields, logo),
            )
            .await
    }

    /// Partial update: only the diffed fields are transmitted; a newly
    /// chosen logo is appended regardless of the patch.
    pub async fn update(
        &self,
        id: &str,
        patch: PatchSet,
        logo: Option<FileAttachment>,
    ) -> ClientResult<Brand> {
        self.gateway
            .expect(
                Method::PUT,
                &format!("/brands/{id}"),
                RequestBody::form(patch, logo),
            )
            .await
    }

    pub async fn get_by_category(&self, category_id: &str) -> ClientResult<Vec<Brand>> {
        self.gateway
            .get(&format!("/categories/{category_id}/brands"))
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> ClientResult<Brand> {
        self.gateway.get(&format!("/brands/{id}")).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.gateway
            .ack(Method::DELETE, &format!("/brands/{id}"), RequestBody::Empty)
            .await
    }
}
