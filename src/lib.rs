//! Prompt Deck - Rust Backend Library
//!
//! Backend for the Prompt Deck desktop application. It includes:
//! - Tauri command handlers for frontend IPC
//! - The prompt grid controller and persistence service
//! - Storage layer (SQLite, JSON config)
//! - Data models and utilities

pub mod commands;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export commonly used items from commands
pub use commands::{
    // Init commands
    init_app, get_version,
    // Health commands
    get_health,
    // Settings commands
    get_settings, update_settings, reset_settings,
    // Grid commands
    load_prompts, get_grid, open_editor, edit_prompt, close_editor,
    set_draft_field, set_search, submit_editor, request_delete,
    cancel_delete, confirm_delete, copy_prompt,
};
pub use commands::prompts::GridState;
pub use models::prompt::{DraftField, Prompt, PromptDraft};
pub use models::response::*;
pub use models::settings::{AppConfig, SettingsUpdate};
pub use services::grid::{DialogState, GridSnapshot, PromptGrid, SubmitTarget};
pub use state::AppState;
pub use utils::error::{AppError, AppResult};
