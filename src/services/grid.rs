//! Prompt Grid Controller
//!
//! Owns all state behind the prompt card grid: the loaded collection, the
//! editor/confirm dialog, the in-progress draft, the two error channels,
//! and the search string. The webview renders from [`GridSnapshot`] and
//! never holds state of its own.
//!
//! The controller is synchronous and pure. Persistence happens in the
//! command layer between a `begin_*` call (which claims the single
//! in-flight slot and yields what to send) and the matching `record_*`
//! call (which reconciles the collection with the confirmed result). No
//! prompt enters the collection before the persistence call succeeds.

use serde::{Deserialize, Serialize};

use crate::models::prompt::{DraftField, Prompt, PromptDraft};
use crate::utils::error::{AppError, AppResult};

/// Which dialog, if any, is on screen. A single union instead of an
/// open flag plus target ids, so "dialog open with no target" cannot
/// be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum DialogState {
    Closed,
    Creating,
    Editing(i64),
    ConfirmingDelete(i64),
}

/// The persistence call a submit resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitTarget {
    Create(PromptDraft),
    Update(i64, PromptDraft),
}

/// Serializable view of the grid for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSnapshot {
    /// Prompts passing the current search filter, display order
    pub prompts: Vec<Prompt>,
    /// Size of the full collection, ignoring the filter
    pub total: usize,
    pub dialog: DialogState,
    pub draft: PromptDraft,
    pub submitting: bool,
    pub deleting: bool,
    pub save_error: Option<String>,
    pub delete_error: Option<String>,
    pub search: String,
}

/// Client-side state for the prompt card grid.
#[derive(Debug, Clone, Default)]
pub struct PromptGrid {
    prompts: Vec<Prompt>,
    dialog: DialogState,
    draft: PromptDraft,
    submitting: bool,
    deleting: bool,
    save_error: Option<String>,
    delete_error: Option<String>,
    search: String,
}

impl Default for DialogState {
    fn default() -> Self {
        Self::Closed
    }
}

impl PromptGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection with freshly loaded prompts and reset all
    /// transient state. Used on startup and explicit reloads.
    pub fn load(&mut self, prompts: Vec<Prompt>) {
        self.prompts = prompts;
        self.dialog = DialogState::Closed;
        self.draft.clear();
        self.submitting = false;
        self.deleting = false;
        self.save_error = None;
        self.delete_error = None;
    }

    /// The full collection, in display order (newest first).
    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    pub fn draft(&self) -> &PromptDraft {
        &self.draft
    }

    pub fn save_error(&self) -> Option<&str> {
        self.save_error.as_deref()
    }

    pub fn delete_error(&self) -> Option<&str> {
        self.delete_error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    // ------------------------------------------------------------------
    // Editor dialog
    // ------------------------------------------------------------------

    /// Open the editor in create mode with a fresh draft.
    pub fn open_create(&mut self) -> AppResult<()> {
        if self.submitting {
            return Err(AppError::command("A save is already in progress"));
        }
        self.dialog = DialogState::Creating;
        self.draft.clear();
        self.save_error = None;
        Ok(())
    }

    /// Open the editor for an existing prompt, loading the draft from
    /// its current fields.
    pub fn begin_edit(&mut self, id: i64) -> AppResult<()> {
        if self.submitting {
            return Err(AppError::command("A save is already in progress"));
        }
        let prompt = self
            .prompts
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found(format!("Prompt {}", id)))?;
        self.draft = PromptDraft::from_prompt(prompt);
        self.dialog = DialogState::Editing(id);
        self.save_error = None;
        Ok(())
    }

    /// Close the editor, discarding unsaved edits. Idempotent; a pending
    /// delete confirmation is left alone (that is `cancel_delete`'s job).
    pub fn close_dialog(&mut self) {
        if matches!(self.dialog, DialogState::Creating | DialogState::Editing(_)) {
            self.dialog = DialogState::Closed;
        }
        self.draft.clear();
        self.save_error = None;
    }

    /// Update a single draft field.
    pub fn set_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Replace the search string. No debouncing; the filter is derived
    /// on every `visible()` call.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Prompts passing the case-insensitive substring filter over name,
    /// description, and content. An empty query returns the whole
    /// collection unchanged in order.
    pub fn visible(&self) -> Vec<&Prompt> {
        if self.search.is_empty() {
            return self.prompts.iter().collect();
        }
        let needle = self.search.to_lowercase();
        self.prompts
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
                    || p.content.to_lowercase().contains(&needle)
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Create / update submission
    // ------------------------------------------------------------------

    /// Claim the single save slot and resolve the draft to a persistence
    /// call. Fails if a save is already in flight or no editor is open.
    pub fn begin_submit(&mut self) -> AppResult<SubmitTarget> {
        if self.submitting {
            return Err(AppError::command("A save is already in progress"));
        }
        let target = match self.dialog {
            DialogState::Creating => SubmitTarget::Create(self.draft.clone()),
            DialogState::Editing(id) => SubmitTarget::Update(id, self.draft.clone()),
            _ => return Err(AppError::command("Editor is not open")),
        };
        self.save_error = None;
        self.submitting = true;
        Ok(target)
    }

    /// Reconcile a confirmed save. An entry with the saved id is replaced
    /// in place; otherwise the prompt is prepended. Keyed on id rather
    /// than the dialog, because the dialog may have moved on while the
    /// persistence call was in flight (close, or a delete confirmation
    /// opening). The editor is closed if still open; a delete
    /// confirmation is left alone.
    pub fn record_saved(&mut self, saved: Prompt) {
        if let Some(slot) = self.prompts.iter_mut().find(|p| p.id == saved.id) {
            *slot = saved;
        } else {
            self.prompts.insert(0, saved);
        }
        if matches!(self.dialog, DialogState::Creating | DialogState::Editing(_)) {
            self.dialog = DialogState::Closed;
        }
        self.draft.clear();
        self.save_error = None;
        self.submitting = false;
    }

    /// Surface a failed save. The dialog stays open with the draft intact
    /// and the collection untouched.
    pub fn record_save_error(&mut self, message: impl Into<String>) {
        self.save_error = Some(message.into());
        self.submitting = false;
    }

    // ------------------------------------------------------------------
    // Delete confirmation
    // ------------------------------------------------------------------

    /// Open the delete confirmation dialog for a prompt.
    pub fn request_delete(&mut self, id: i64) -> AppResult<()> {
        if self.deleting {
            return Err(AppError::command("A delete is already in progress"));
        }
        if !self.prompts.iter().any(|p| p.id == id) {
            return Err(AppError::not_found(format!("Prompt {}", id)));
        }
        self.dialog = DialogState::ConfirmingDelete(id);
        self.delete_error = None;
        Ok(())
    }

    /// Dismiss the delete confirmation. Idempotent.
    pub fn cancel_delete(&mut self) {
        if matches!(self.dialog, DialogState::ConfirmingDelete(_)) {
            self.dialog = DialogState::Closed;
        }
        self.delete_error = None;
    }

    /// Claim the single delete slot. Only valid after an explicit
    /// confirmation request.
    pub fn begin_delete(&mut self) -> AppResult<i64> {
        if self.deleting {
            return Err(AppError::command("A delete is already in progress"));
        }
        let DialogState::ConfirmingDelete(id) = self.dialog else {
            return Err(AppError::command("No delete pending confirmation"));
        };
        self.delete_error = None;
        self.deleting = true;
        Ok(id)
    }

    /// Reconcile a confirmed delete: remove exactly the matching entry
    /// and dismiss the confirmation dialog.
    pub fn record_deleted(&mut self, id: i64) {
        self.prompts.retain(|p| p.id != id);
        if self.dialog == DialogState::ConfirmingDelete(id) {
            self.dialog = DialogState::Closed;
        }
        self.delete_error = None;
        self.deleting = false;
    }

    /// Surface a failed delete. The confirmation dialog stays open with
    /// its target still set.
    pub fn record_delete_error(&mut self, message: impl Into<String>) {
        self.delete_error = Some(message.into());
        self.deleting = false;
    }

    // ------------------------------------------------------------------
    // Snapshot
    // ------------------------------------------------------------------

    /// Serializable view for the frontend to render from.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            prompts: self.visible().into_iter().cloned().collect(),
            total: self.prompts.len(),
            dialog: self.dialog,
            draft: self.draft.clone(),
            submitting: self.submitting,
            deleting: self.deleting,
            save_error: self.save_error.clone(),
            delete_error: self.delete_error.clone(),
            search: self.search.clone(),
        }
    }
}
