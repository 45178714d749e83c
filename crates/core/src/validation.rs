//! Client-side form validation, run before any network call.
//!
//! Validation failures are recovered locally as inline field errors; nothing
//! is ever sent to the server. Checks are shallow on purpose: required
//! fields, minimum string length, required file selection, and password
//! confirmation. Messages are the user-facing Vietnamese strings shown next
//! to the form controls.

use serde::{Deserialize, Serialize};

use crate::diff::FieldMap;
use crate::edit::FileAttachment;

/// Declarative validation rules for one form field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormFieldDef {
    /// Field name, matching the key in the draft [`FieldMap`].
    pub name: String,
    /// Human-readable label used in error messages.
    pub label: String,
    /// Whether the field must be non-empty.
    pub required: bool,
    /// Minimum string length, when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_len: Option<usize>,
}

/// An inline validation error for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Offending field name.
    pub field: String,
    /// User-facing message.
    pub message: String,
}

/// Whether a value counts as filled (non-null, non-blank, non-empty array).
fn is_filled(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::String(s) => !s.trim().is_empty(),
        serde_json::Value::Array(a) => !a.is_empty(),
        _ => true,
    }
}

/// Validate form values against field definitions.
///
/// Returns an empty vec when every field passes. Length checks only apply
/// to string values that are present; a missing optional field is fine.
pub fn validate_form(values: &FieldMap, defs: &[FormFieldDef]) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for def in defs {
        let value = values.get(&def.name);

        let filled = value.map(is_filled).unwrap_or(false);
        if def.required && !filled {
            errors.push(FieldError {
                field: def.name.clone(),
                message: format!("Vui lòng nhập {}", def.label),
            });
            continue;
        }

        if let (Some(min), Some(serde_json::Value::String(s))) = (def.min_len, value) {
            if filled && s.trim().chars().count() < min {
                errors.push(FieldError {
                    field: def.name.clone(),
                    message: format!("{} phải có ít nhất {min} ký tự", def.label),
                });
            }
        }
    }

    errors
}

/// Require a file selection, e.g. the category icon on create.
///
/// `message` is the form-specific prompt ("Vui lòng chọn hình ảnh icon").
pub fn require_file(
    file: Option<&FileAttachment>,
    field: &str,
    message: &str,
) -> Result<(), FieldError> {
    match file {
        Some(_) => Ok(()),
        None => Err(FieldError {
            field: field.to_string(),
            message: message.to_string(),
        }),
    }
}

/// Check that the password confirmation matches the password.
pub fn validate_password_confirmation(password: &str, confirmation: &str) -> Result<(), FieldError> {
    if password == confirmation {
        Ok(())
    } else {
        Err(FieldError {
            field: "confirmPassword".to_string(),
            message: "Mật khẩu xác nhận không khớp".to_string(),
        })
    }
}
