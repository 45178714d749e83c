//! Resource services: one module per catalog entity.
//!
//! Each service translates typed create/update requests into the correct
//! transport encoding (JSON for plain payloads, multipart form whenever a
//! file may ride along or the endpoint expects form fields) and the correct
//! URL, then goes through the gateway. Update calls take a
//! [`PatchSet`](techmart_core::diff::PatchSet) that the edit session already
//! computed; services never re-diff.
//!
//! Application failure codes come back as [`ClientError::Application`]
//! through the gateway's typed helpers, so every service call returns one
//! unified `Result`.

pub mod attribute;
pub mod brand;
pub mod category;
pub mod order;
pub mod pc_build;
pub mod product;
pub mod product_image;
pub mod product_unit;
pub mod warranty;

use serde::Serialize;
use techmart_core::diff::PatchSet;

use crate::error::{ClientError, ClientResult};

/// Collect the defined fields of a create request into form fields.
///
/// Null values and empty strings are skipped: a create sends only what the
/// form actually filled in, mirroring the partial-update convention.
pub(crate) fn defined_fields<T: Serialize>(data: &T) -> ClientResult<PatchSet> {
    let value = serde_json::to_value(data)?;
    let map = match value {
        serde_json::Value::Object(map) => map,
        other => {
            return Err(ClientError::Validation(format!(
                "expected an object-shaped request, got {other}"
            )))
        }
    };

    let mut fields = PatchSet::new();
    for (name, value) in map {
        match &value {
            serde_json::Value::Null => {}
            serde_json::Value::String(s) if s.is_empty() => {}
            _ => fields.set(name, value),
        }
    }
    Ok(fields)
}
