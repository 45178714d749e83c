//! PC-build service: curated build configurations with a cover image.

use serde::{Deserialize, Serialize};
use techmart_core::diff::PatchSet;
use techmart_core::edit::FileAttachment;
use techmart_core::EntityId;
use validator::Validate;

use crate::body::RequestBody;
use crate::error::ClientResult;
use crate::gateway::{Gateway, Method};
use crate::services::defined_fields;

/// A PC build configuration as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PcBuild {
    pub id: EntityId,
    pub build_name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// URL of the stored cover image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Product units making up the build.
    #[serde(default)]
    pub unit_ids: Vec<EntityId>,
}

/// Fields the create form submits.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePcBuild {
    #[validate(length(min = 2, message = "Tên cấu hình phải có ít nhất 2 ký tự"))]
    pub build_name: String,
    pub description: Option<String>,
}

/// CRUD calls for `/pc-builds`.
#[derive(Debug, Clone)]
pub struct PcBuildService {
    gateway: Gateway,
}

impl PcBuildService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn create(
        &self,
        data: &CreatePcBuild,
        image: Option<FileAttachment>,
    ) -> ClientResult<PcBuild> {
        data.validate()?;
        let fields = defined_fields(data)?;
        self.gateway
            .expect(Method::POST, "/pc-builds", RequestBody::form(fields, image))
            .await
    }

    /// Partial update; replacing the cover image counts as a change on its
    /// own even when no text field differs.
    pub async fn update(
        &self,
        id: &str,
        patch: PatchSet,
        image: Option<FileAttachment>,
    ) -> ClientResult<PcBuild> {
        self.gateway
            .expect(
                Method::PUT,
                &format!("/pc-builds/{id}"),
                RequestBody::form(patch, image),
            )
            .await
    }

    pub async fn get_all(&self) -> ClientResult<Vec<PcBuild>> {
        self.gateway.get("/pc-builds").await
    }

    pub async fn get_by_id(&self, id: &str) -> ClientResult<PcBuild> {
        self.gateway.get(&format!("/pc-builds/{id}")).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.gateway
            .ack(
                Method::DELETE,
                &format!("/pc-builds/{id}"),
                RequestBody::Empty,
            )
            .await
    }
}
