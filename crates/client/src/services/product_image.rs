//! Product-image service: gallery images attached to a product.
//!
//! [`ProductImageService::upload_many`] posts each image as its own request
//! and keeps going on failure: an image that fails to upload does not roll
//! back the ones already stored. The caller warns the user from the returned
//! [`UploadReport`] instead.

use serde::{Deserialize, Serialize};
use techmart_core::diff::PatchSet;
use techmart_core::edit::FileAttachment;
use techmart_core::EntityId;

use crate::body::RequestBody;
use crate::error::ClientResult;
use crate::gateway::{Gateway, Method};

/// A stored product image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub id: EntityId,
    pub product_id: EntityId,
    pub image_url: String,
    #[serde(default)]
    pub is_primary: bool,
}

/// Result of a multi-image upload.
#[derive(Debug, Clone, Default)]
pub struct UploadReport {
    /// Images the backend accepted, in upload order.
    pub uploaded: Vec<ProductImage>,
    /// File names that failed, for the "some images failed" warning.
    pub failed: Vec<String>,
}

impl UploadReport {
    /// Whether every image made it.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Calls for product gallery images.
#[derive(Debug, Clone)]
pub struct ProductImageService {
    gateway: Gateway,
}

impl ProductImageService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Upload a single image.
    pub async fn upload(&self, product_id: &str, image: FileAttachment) -> ClientResult<ProductImage> {
        self.gateway
            .expect(
                Method::POST,
                &format!("/products/{product_id}/images"),
                RequestBody::form(PatchSet::new(), Some(image)),
            )
            .await
    }

    /// Upload several images, one request each, without rollback.
    ///
    /// Failures are recorded by file name and do not abort the remaining
    /// uploads.
    pub async fn upload_many(
        &self,
        product_id: &str,
        images: Vec<FileAttachment>,
    ) -> UploadReport {
        let mut report = UploadReport::default();

        for image in images {
            let file_name = image.file_name.clone();
            match self.upload(product_id, image).await {
                Ok(stored) => report.uploaded.push(stored),
                Err(err) => {
                    tracing::warn!(product_id, file_name, error = %err, "image upload failed");
                    report.failed.push(file_name);
                }
            }
        }

        report
    }

    pub async fn get_by_product(&self, product_id: &str) -> ClientResult<Vec<ProductImage>> {
        self.gateway
            .get(&format!("/products/{product_id}/images"))
            .await
    }

    /// Mark one image as the product's primary display image.
    pub async fn set_primary(&self, image_id: &str) -> ClientResult<()> {
        self.gateway
            .ack(
                Method::PUT,
                &format!("/product-images/{image_id}/primary"),
                RequestBody::Empty,
            )
            .await
    }

    pub async fn delete(&self, image_id: &str) -> ClientResult<()> {
        self.gateway
            .ack(
                Method::DELETE,
                &format!("/product-images/{image_id}"),
                RequestBody::Empty,
            )
            .await
    }
}
