//! Initialization Commands
//!
//! Commands for application initialization and setup. On startup,
//! initializes the backend services and loads the prompt collection
//! into the grid controller.

use serde::{Deserialize, Serialize};
use tauri::State;

use crate::commands::prompts::GridState;
use crate::models::response::CommandResponse;
use crate::services::prompt::PromptService;
use crate::state::AppState;

/// Result of application initialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitResult {
    /// Success message
    pub message: String,
    /// Number of prompts loaded into the grid
    pub prompt_count: usize,
}

/// Initialize the application on startup. Sets up the database and
/// config services, then loads the prompt collection into the grid.
#[tauri::command]
pub async fn init_app(
    state: State<'_, AppState>,
    grid_state: State<'_, GridState>,
) -> Result<CommandResponse<InitResult>, String> {
    if let Err(e) = state.initialize().await {
        return Ok(CommandResponse::err(e.to_string()));
    }

    let prompts = match state
        .with_database(|db| PromptService::from_database(db).list_prompts(None))
        .await
    {
        Ok(prompts) => prompts,
        Err(e) => return Ok(CommandResponse::err(e.to_string())),
    };

    let prompt_count = prompts.len();
    grid_state.grid.write().await.load(prompts);
    tracing::info!(prompt_count, "application initialized");

    Ok(CommandResponse::ok(InitResult {
        message: "Application initialized successfully".to_string(),
        prompt_count,
    }))
}

/// Get the application version
#[tauri::command]
pub fn get_version() -> CommandResponse<String> {
    CommandResponse::ok(env!("CARGO_PKG_VERSION").to_string())
}
