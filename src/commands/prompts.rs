//! Prompt Grid Commands
//!
//! Tauri command handlers for the prompt card grid. Every interaction the
//! webview can perform maps to one command here; each returns a fresh
//! [`GridSnapshot`] so the frontend always renders the controller's state.
//!
//! Submits and deletes release the grid lock while the database call is
//! in flight; the `begin_*`/`record_*` pair on the controller keeps a
//! second mutation from starting in the meantime.

use std::sync::Arc;

use serde::Serialize;
use tauri::{AppHandle, Emitter, State};
use tokio::sync::RwLock;

use crate::models::prompt::DraftField;
use crate::models::response::CommandResponse;
use crate::services::grid::{GridSnapshot, PromptGrid, SubmitTarget};
use crate::services::prompt::PromptService;
use crate::state::AppState;
use crate::utils::error::AppError;

/// State for the prompt grid controller, managed by Tauri
pub struct GridState {
    pub grid: Arc<RwLock<PromptGrid>>,
}

impl GridState {
    pub fn new() -> Self {
        Self {
            grid: Arc::new(RwLock::new(PromptGrid::new())),
        }
    }
}

impl Default for GridState {
    fn default() -> Self {
        Self::new()
    }
}

/// Payload for the transient copy notification event
#[derive(Debug, Clone, Serialize)]
struct CopyFeedback {
    id: i64,
    ok: bool,
    message: String,
}

/// Reload the prompt collection from the database into the grid
#[tauri::command]
pub async fn load_prompts(
    state: State<'_, GridState>,
    app_state: State<'_, AppState>,
) -> Result<CommandResponse<GridSnapshot>, String> {
    let result = app_state
        .with_database(|db| PromptService::from_database(db).list_prompts(None))
        .await;

    match result {
        Ok(prompts) => {
            let mut grid = state.grid.write().await;
            grid.load(prompts);
            Ok(CommandResponse::ok(grid.snapshot()))
        }
        Err(e) => Ok(CommandResponse::err(e.to_string())),
    }
}

/// Get the current grid snapshot without mutating anything
#[tauri::command]
pub async fn get_grid(
    state: State<'_, GridState>,
) -> Result<CommandResponse<GridSnapshot>, String> {
    let grid = state.grid.read().await;
    Ok(CommandResponse::ok(grid.snapshot()))
}

/// Open the editor dialog in create mode
#[tauri::command]
pub async fn open_editor(
    state: State<'_, GridState>,
) -> Result<CommandResponse<GridSnapshot>, String> {
    let mut grid = state.grid.write().await;
    match grid.open_create() {
        Ok(()) => Ok(CommandResponse::ok(grid.snapshot())),
        Err(e) => Ok(CommandResponse::err(e.to_string())),
    }
}

/// Open the editor dialog for an existing prompt
#[tauri::command]
pub async fn edit_prompt(
    id: i64,
    state: State<'_, GridState>,
) -> Result<CommandResponse<GridSnapshot>, String> {
    let mut grid = state.grid.write().await;
    match grid.begin_edit(id) {
        Ok(()) => Ok(CommandResponse::ok(grid.snapshot())),
        Err(e) => Ok(CommandResponse::err(e.to_string())),
    }
}

/// Close the editor dialog, discarding unsaved edits
#[tauri::command]
pub async fn close_editor(
    state: State<'_, GridState>,
) -> Result<CommandResponse<GridSnapshot>, String> {
    let mut grid = state.grid.write().await;
    grid.close_dialog();
    Ok(CommandResponse::ok(grid.snapshot()))
}

/// Update a single draft field
#[tauri::command]
pub async fn set_draft_field(
    field: DraftField,
    value: String,
    state: State<'_, GridState>,
) -> Result<CommandResponse<GridSnapshot>, String> {
    let mut grid = state.grid.write().await;
    grid.set_draft_field(field, value);
    Ok(CommandResponse::ok(grid.snapshot()))
}

/// Replace the search string and return the re-filtered grid
#[tauri::command]
pub async fn set_search(
    query: String,
    state: State<'_, GridState>,
) -> Result<CommandResponse<GridSnapshot>, String> {
    let mut grid = state.grid.write().await;
    grid.set_search(query);
    Ok(CommandResponse::ok(grid.snapshot()))
}

/// Submit the editor: create when in create mode, update when editing.
/// On success the collection is reconciled and the dialog closed; on
/// failure the dialog stays open with the error surfaced in the snapshot.
#[tauri::command]
pub async fn submit_editor(
    state: State<'_, GridState>,
    app_state: State<'_, AppState>,
) -> Result<CommandResponse<GridSnapshot>, String> {
    let target = {
        let mut grid = state.grid.write().await;
        match grid.begin_submit() {
            Ok(target) => target,
            Err(e) => return Ok(CommandResponse::err(e.to_string())),
        }
    };

    let result = match target {
        SubmitTarget::Create(draft) => {
            app_state
                .with_database(|db| PromptService::from_database(db).create_prompt(&draft))
                .await
        }
        SubmitTarget::Update(id, draft) => {
            app_state
                .with_database(|db| PromptService::from_database(db).update_prompt(id, &draft))
                .await
        }
    };

    let mut grid = state.grid.write().await;
    match result {
        Ok(saved) => grid.record_saved(saved),
        Err(e) => {
            tracing::warn!(error = %e, "prompt save failed");
            grid.record_save_error(e.to_string());
        }
    }
    Ok(CommandResponse::ok(grid.snapshot()))
}

/// Open the delete confirmation dialog for a prompt
#[tauri::command]
pub async fn request_delete(
    id: i64,
    state: State<'_, GridState>,
) -> Result<CommandResponse<GridSnapshot>, String> {
    let mut grid = state.grid.write().await;
    match grid.request_delete(id) {
        Ok(()) => Ok(CommandResponse::ok(grid.snapshot())),
        Err(e) => Ok(CommandResponse::err(e.to_string())),
    }
}

/// Dismiss the delete confirmation dialog
#[tauri::command]
pub async fn cancel_delete(
    state: State<'_, GridState>,
) -> Result<CommandResponse<GridSnapshot>, String> {
    let mut grid = state.grid.write().await;
    grid.cancel_delete();
    Ok(CommandResponse::ok(grid.snapshot()))
}

/// Delete the prompt pending confirmation. On failure the confirmation
/// dialog stays open with its target intact.
#[tauri::command]
pub async fn confirm_delete(
    state: State<'_, GridState>,
    app_state: State<'_, AppState>,
) -> Result<CommandResponse<GridSnapshot>, String> {
    let id = {
        let mut grid = state.grid.write().await;
        match grid.begin_delete() {
            Ok(id) => id,
            Err(e) => return Ok(CommandResponse::err(e.to_string())),
        }
    };

    let result = app_state
        .with_database(|db| PromptService::from_database(db).delete_prompt(id))
        .await;

    let mut grid = state.grid.write().await;
    match result {
        Ok(()) => grid.record_deleted(id),
        Err(e) => {
            tracing::warn!(error = %e, id, "prompt delete failed");
            grid.record_delete_error(e.to_string());
        }
    }
    Ok(CommandResponse::ok(grid.snapshot()))
}

/// Copy a prompt's content to the system clipboard. Fire-and-forget:
/// success or failure is reported through a transient `prompt:copied`
/// event and never mutates collection state.
#[tauri::command]
pub async fn copy_prompt(
    id: i64,
    app: AppHandle,
    state: State<'_, GridState>,
) -> Result<CommandResponse<()>, String> {
    let content = {
        let grid = state.grid.read().await;
        grid.prompts().iter().find(|p| p.id == id).map(|p| p.content.clone())
    };

    let Some(content) = content else {
        return Ok(CommandResponse::err(format!("Not found: Prompt {}", id)));
    };

    let outcome = arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(content))
        .map_err(|e| AppError::clipboard(e.to_string()));

    let feedback = match &outcome {
        Ok(()) => CopyFeedback {
            id,
            ok: true,
            message: "Prompt copied to clipboard".to_string(),
        },
        Err(e) => {
            tracing::warn!(error = %e, id, "clipboard copy failed");
            CopyFeedback {
                id,
                ok: false,
                message: e.to_string(),
            }
        }
    };
    let _ = app.emit("prompt:copied", &feedback);

    match outcome {
        Ok(()) => Ok(CommandResponse::ok(())),
        Err(e) => Ok(CommandResponse::err(e.to_string())),
    }
}
