//! Settings Commands
//!
//! Read, update, and reset the settings the grid renders with: theme,
//! language, and the card column count.

use tauri::State;

use crate::models::response::CommandResponse;
use crate::models::settings::{AppConfig, SettingsUpdate};
use crate::state::AppState;

/// Get current application settings
#[tauri::command]
pub async fn get_settings(
    state: State<'_, AppState>,
) -> Result<CommandResponse<AppConfig>, String> {
    match state.get_config().await {
        Ok(config) => Ok(CommandResponse::ok(config)),
        Err(e) => Ok(CommandResponse::err(e.to_string())),
    }
}

/// Apply a partial settings update. Invalid values (unknown theme, a
/// card column count outside 1..=6) are rejected and the stored
/// settings stay unchanged.
#[tauri::command]
pub async fn update_settings(
    state: State<'_, AppState>,
    update: SettingsUpdate,
) -> Result<CommandResponse<AppConfig>, String> {
    match state.update_config(update).await {
        Ok(config) => {
            tracing::info!(
                theme = %config.theme,
                card_columns = config.card_columns,
                "settings updated"
            );
            Ok(CommandResponse::ok(config))
        }
        Err(e) => {
            tracing::warn!(error = %e, "settings update rejected");
            Ok(CommandResponse::err(e.to_string()))
        }
    }
}

/// Restore the default settings and persist them
#[tauri::command]
pub async fn reset_settings(
    state: State<'_, AppState>,
) -> Result<CommandResponse<AppConfig>, String> {
    match state.reset_config().await {
        Ok(config) => {
            tracing::info!("settings reset to defaults");
            Ok(CommandResponse::ok(config))
        }
        Err(e) => Ok(CommandResponse::err(e.to_string())),
    }
}
