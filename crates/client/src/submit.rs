//! Edit-submission driver shared by every edit dialog.
//!
//! Takes the [`UpdatePlan`] an [`techmart_core::edit::EditSession`] produced
//! and issues at most one network call: [`UpdatePlan::NoChanges`]
//! short-circuits without touching the service, and a successful
//! [`UpdatePlan::Submit`] maps to [`SubmitOutcome::Updated`] so the caller
//! can close the dialog and reload the owning list. Errors propagate
//! untouched; the session stays intact for a retry.

use std::future::Future;

use techmart_core::diff::PatchSet;
use techmart_core::edit::{FileAttachment, UpdatePlan, NO_CHANGES_MESSAGE};

use crate::error::ClientResult;

/// Message shown after a successful update.
pub const UPDATED_MESSAGE: &str = "Cập nhật thành công";

/// Outcome of one edit-dialog submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    /// Nothing differed from the baseline: no call was made, the owning
    /// list must not reload.
    NoChanges,
    /// The update succeeded and the server returned the fresh entity.
    Updated(T),
}

impl<T> SubmitOutcome<T> {
    /// Toast text for this outcome.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NoChanges => NO_CHANGES_MESSAGE,
            Self::Updated(_) => UPDATED_MESSAGE,
        }
    }

    /// Whether the owning list/table should reload.
    pub fn should_reload(&self) -> bool {
        matches!(self, Self::Updated(_))
    }
}

/// Drive a planned update through the given service call.
///
/// `send` receives the patch and optional file and performs the actual
/// update request; it is not invoked at all for [`UpdatePlan::NoChanges`].
pub async fn submit_update<T, F, Fut>(plan: UpdatePlan, send: F) -> ClientResult<SubmitOutcome<T>>
where
    F: FnOnce(PatchSet, Option<FileAttachment>) -> Fut,
    Fut: Future<Output = ClientResult<T>>,
{
    match plan {
        UpdatePlan::NoChanges => Ok(SubmitOutcome::NoChanges),
        UpdatePlan::Submit { patch, file } => {
            let updated = send(patch, file).await?;
            Ok(SubmitOutcome::Updated(updated))
        }
    }
}
