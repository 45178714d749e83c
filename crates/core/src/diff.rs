//! Field-level diff computation for partial updates.
//!
//! Every edit dialog holds two copies of an entity's editable fields: the
//! *baseline* (last known server state, captured when the dialog opened) and
//! the *draft* (current form state). Before an update is submitted, only the
//! fields whose draft value differs from the baseline are collected into a
//! [`PatchSet`]; untouched fields are never transmitted, so the server treats
//! absent fields as "leave unchanged".
//!
//! Values are flat scalars (strings, numbers, bools, id references) compared
//! by strict structural equality on [`serde_json::Value`]. A nested value
//! would diff as one opaque field and be resent whole, which matches the
//! partial-update wire format.

use serde::{Deserialize, Serialize};

/// Editable field values keyed by field name.
pub type FieldMap = serde_json::Map<String, serde_json::Value>;

/// The status of a single field in a baseline/draft comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffStatus {
    /// Present only in the draft.
    Added,
    /// Present only in the baseline.
    Removed,
    /// Present in both with different values.
    Changed,
    /// Present in both with identical values.
    Unchanged,
}

impl DiffStatus {
    /// String representation for display and logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Changed => "changed",
            Self::Unchanged => "unchanged",
        }
    }
}

impl std::fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field's before/after values in a diff report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldChange {
    /// Field name as it appears on the wire.
    pub field: String,
    /// Comparison outcome.
    pub status: DiffStatus,
    /// Baseline value (`Null` when the field was added).
    pub baseline: serde_json::Value,
    /// Draft value (`Null` when the field was removed).
    pub draft: serde_json::Value,
}

/// The minimal set of changed fields to transmit in an update request.
///
/// Wraps a [`FieldMap`] holding only fields whose draft value differs from
/// the baseline. Field order is irrelevant to equality.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatchSet(FieldMap);

impl PatchSet {
    /// An empty patch set.
    pub fn new() -> Self {
        Self(FieldMap::new())
    }

    /// Whether no field changed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of changed fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Record a changed field.
    pub fn set(&mut self, field: impl Into<String>, value: serde_json::Value) {
        self.0.insert(field.into(), value);
    }

    /// New value for a field, if it changed.
    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.0.get(field)
    }

    /// Iterate over changed fields and their new values.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.0.iter()
    }

    /// Consume into the underlying field map.
    pub fn into_fields(self) -> FieldMap {
        self.0
    }
}

impl From<FieldMap> for PatchSet {
    fn from(fields: FieldMap) -> Self {
        Self(fields)
    }
}

/// Compute the patch set between baseline and draft.
///
/// A field present only in the draft counts as changed. A field present only
/// in the baseline is ignored: dialogs edit values, they never remove fields,
/// so a missing draft key means the form never rendered that field.
pub fn compute_diff(baseline: &FieldMap, draft: &FieldMap) -> PatchSet {
    let mut patch = PatchSet::new();
    for (field, value) in draft {
        if baseline.get(field) != Some(value) {
            patch.set(field.clone(), value.clone());
        }
    }
    patch
}

/// Full per-field comparison report, for logging and change inspection.
///
/// Covers the union of baseline and draft keys, baseline keys first.
pub fn diff_report(baseline: &FieldMap, draft: &FieldMap) -> Vec<FieldChange> {
    let mut report = Vec::with_capacity(baseline.len().max(draft.len()));

    for (field, old) in baseline {
        let change = match draft.get(field) {
            Some(new) if new == old => FieldChange {
                field: field.clone(),
                status: DiffStatus::Unchanged,
                baseline: old.clone(),
                draft: new.clone(),
            },
            Some(new) => FieldChange {
                field: field.clone(),
                status: DiffStatus::Changed,
                baseline: old.clone(),
                draft: new.clone(),
            },
            None => FieldChange {
                field: field.clone(),
                status: DiffStatus::Removed,
                baseline: old.clone(),
                draft: serde_json::Value::Null,
            },
        };
        report.push(change);
    }

    for (field, new) in draft {
        if !baseline.contains_key(field) {
            report.push(FieldChange {
                field: field.clone(),
                status: DiffStatus::Added,
                baseline: serde_json::Value::Null,
                draft: new.clone(),
            });
        }
    }

    report
}
