//! Settings Models
//!
//! Application configuration and settings data structures.

use serde::{Deserialize, Serialize};

/// Application configuration stored in config.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// UI theme: "light", "dark", or "system"
    pub theme: String,
    /// Language code (e.g., "en", "zh")
    pub language: String,
    /// Number of card columns in the grid (1..=6)
    #[serde(default = "default_card_columns")]
    pub card_columns: u32,
}

fn default_card_columns() -> u32 {
    3
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: "system".to_string(),
            language: "en".to_string(),
            card_columns: 3,
        }
    }
}

/// Settings update request (partial update)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsUpdate {
    pub theme: Option<String>,
    pub language: Option<String>,
    pub card_columns: Option<u32>,
}

impl AppConfig {
    /// Apply a partial update to the configuration
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(theme) = update.theme {
            self.theme = theme;
        }
        if let Some(language) = update.language {
            self.language = language;
        }
        if let Some(columns) = update.card_columns {
            self.card_columns = columns;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !["light", "dark", "system"].contains(&self.theme.as_str()) {
            return Err(format!(
                "Invalid theme: {}. Must be 'light', 'dark', or 'system'",
                self.theme
            ));
        }

        if self.language.len() < 2 || self.language.len() > 5 {
            return Err(format!("Invalid language code: {}", self.language));
        }

        if !(1..=6).contains(&self.card_columns) {
            return Err("card_columns must be between 1 and 6".to_string());
        }

        Ok(())
    }
}
