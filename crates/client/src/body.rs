//! Request-body encoding: JSON vs multipart form data.
//!
//! Mutation endpoints that may carry a file (or that the backend declares as
//! form-based) use `multipart/form-data`; everything else uses JSON. Only
//! fields present in the patch are appended to a form, which is what gives
//! update requests their partial-update semantics on the wire.

use reqwest::multipart::{Form, Part};
use serde::Serialize;
use techmart_core::diff::PatchSet;
use techmart_core::edit::FileAttachment;

use crate::error::{ClientError, ClientResult};

/// The body of an outbound request.
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// No body (reads and deletes).
    Empty,
    /// JSON-encoded body; the gateway sets `Content-Type: application/json`.
    Json(serde_json::Value),
    /// Multipart form; no explicit content-type is set so the transport can
    /// pick the boundary.
    Multipart {
        /// Text fields to append, one part per patch entry.
        fields: PatchSet,
        /// File part, appended last when present.
        file: Option<FileAttachment>,
    },
}

impl RequestBody {
    /// JSON body from any serializable value.
    pub fn json<T: Serialize>(value: &T) -> ClientResult<Self> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// Multipart form body from a patch set and optional file.
    pub fn form(fields: PatchSet, file: Option<FileAttachment>) -> Self {
        Self::Multipart { fields, file }
    }
}

/// Render a scalar field value as multipart text.
///
/// Strings go through unquoted; numbers and bools use their display form;
/// null becomes the empty string (the backend treats it as a cleared field).
fn text_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Assemble a reqwest multipart form from patch fields plus file.
pub(crate) fn build_form(fields: PatchSet, file: Option<FileAttachment>) -> ClientResult<Form> {
    let mut form = Form::new();

    for (name, value) in fields.into_fields() {
        form = form.text(name, text_value(&value));
    }

    if let Some(attachment) = file {
        let part = Part::bytes(attachment.bytes)
            .file_name(attachment.file_name)
            .mime_str(&attachment.mime)
            .map_err(ClientError::Transport)?;
        form = form.part(attachment.field_name, part);
    }

    Ok(form)
}
