//! Health Check Commands
//!
//! Commands for checking the health status of backend services.

use tauri::State;

use crate::models::response::{CommandResponse, HealthResponse};
use crate::state::AppState;

/// Get the health status of all backend services
#[tauri::command]
pub async fn get_health(
    state: State<'_, AppState>,
) -> Result<CommandResponse<HealthResponse>, String> {
    let mut health = HealthResponse::default();

    health.database = state.is_database_healthy();
    health.config = state.is_config_healthy();

    health.status = if health.database && health.config {
        "healthy".to_string()
    } else {
        "degraded".to_string()
    };

    Ok(CommandResponse::ok(health))
}
