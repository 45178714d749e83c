//! Edit-session lifecycle for the partial-update protocol.
//!
//! An [`EditSession`] backs one open edit dialog: the baseline snapshot is
//! captured when the dialog opens, the draft is mutated as the user types,
//! and [`EditSession::plan`] decides at submit time whether a network call is
//! warranted at all. Planning never consumes the session, so a failed
//! submission leaves everything in place for a retry and a repeated
//! unchanged submission keeps planning [`UpdatePlan::NoChanges`].
//!
//! There is no conflict detection: if the server state diverged since the
//! baseline was fetched, the partial update overwrites only the diffed
//! fields (last write wins per field).

use crate::diff::{compute_diff, FieldMap, PatchSet};

/// Informational message shown when a submission has nothing to send.
pub const NO_CHANGES_MESSAGE: &str = "Không có thay đổi nào để cập nhật";

/// A newly chosen file to upload alongside an update.
///
/// A file always counts as a change: the baseline only ever holds the URL of
/// the previously stored asset, never file content, so there is nothing to
/// compare against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    /// Form field name the backend expects, e.g. `"icon"` or `"logo"`.
    pub field_name: String,
    /// Original file name, sent as the multipart part's filename.
    pub file_name: String,
    /// MIME type, e.g. `"image/png"`.
    pub mime: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

/// The submit-time decision for an edit dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdatePlan {
    /// Nothing changed: no network call, show [`NO_CHANGES_MESSAGE`].
    NoChanges,
    /// Issue an update carrying only the changed fields plus the file.
    ///
    /// `patch` may be empty for a file-only or reference-only change.
    Submit {
        /// Changed scalar fields.
        patch: PatchSet,
        /// Newly chosen file, forwarded unconditionally.
        file: Option<FileAttachment>,
    },
}

/// State behind one open edit dialog.
#[derive(Debug, Clone)]
pub struct EditSession {
    baseline: FieldMap,
    draft: FieldMap,
    file: Option<FileAttachment>,
    reference_changed: bool,
}

impl EditSession {
    /// Open a session from the last known server state.
    ///
    /// The draft starts as a copy of the baseline.
    pub fn open(baseline: FieldMap) -> Self {
        let draft = baseline.clone();
        Self {
            baseline,
            draft,
            file: None,
            reference_changed: false,
        }
    }

    /// The server-known values captured at open time.
    pub fn baseline(&self) -> &FieldMap {
        &self.baseline
    }

    /// The current form values.
    pub fn draft(&self) -> &FieldMap {
        &self.draft
    }

    /// Record a form edit.
    pub fn set_field(&mut self, field: impl Into<String>, value: serde_json::Value) {
        self.draft.insert(field.into(), value);
    }

    /// Attach a newly chosen file.
    pub fn attach_file(&mut self, file: FileAttachment) {
        self.file = Some(file);
    }

    /// Flag a foreign-key reference change tracked outside the field set
    /// (e.g. moving a sub-category to a different parent category).
    pub fn mark_reference_changed(&mut self) {
        self.reference_changed = true;
    }

    /// Whether submitting now would issue a network call.
    pub fn has_changes(&self) -> bool {
        self.file.is_some()
            || self.reference_changed
            || !compute_diff(&self.baseline, &self.draft).is_empty()
    }

    /// Decide what to submit.
    ///
    /// Borrows the session: the caller keeps it for retry on failure.
    pub fn plan(&self) -> UpdatePlan {
        let patch = compute_diff(&self.baseline, &self.draft);
        if patch.is_empty() && self.file.is_none() && !self.reference_changed {
            return UpdatePlan::NoChanges;
        }
        UpdatePlan::Submit {
            patch,
            file: self.file.clone(),
        }
    }
}
