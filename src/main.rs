// Prompt Deck - Tauri Application Entry Point
// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use prompt_deck::commands::prompts::GridState;
use prompt_deck::state::AppState;

#[cfg(debug_assertions)]
use tauri::Manager;

fn main() {
    tauri::Builder::default()
        .manage(AppState::new())
        .manage(GridState::new())
        .invoke_handler(tauri::generate_handler![
            // Initialization commands
            prompt_deck::commands::init::init_app,
            prompt_deck::commands::init::get_version,
            // Health commands
            prompt_deck::commands::health::get_health,
            // Settings commands
            prompt_deck::commands::settings::get_settings,
            prompt_deck::commands::settings::update_settings,
            prompt_deck::commands::settings::reset_settings,
            // Grid commands
            prompt_deck::commands::prompts::load_prompts,
            prompt_deck::commands::prompts::get_grid,
            prompt_deck::commands::prompts::open_editor,
            prompt_deck::commands::prompts::edit_prompt,
            prompt_deck::commands::prompts::close_editor,
            prompt_deck::commands::prompts::set_draft_field,
            prompt_deck::commands::prompts::set_search,
            prompt_deck::commands::prompts::submit_editor,
            prompt_deck::commands::prompts::request_delete,
            prompt_deck::commands::prompts::cancel_delete,
            prompt_deck::commands::prompts::confirm_delete,
            prompt_deck::commands::prompts::copy_prompt,
        ])
        .setup(|_app| {
            #[cfg(debug_assertions)]
            {
                if let Some(window) = _app.get_webview_window("main") {
                    window.open_devtools();
                }
            }
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
