//! Prompt Models
//!
//! Data structures for the prompt card grid.

use serde::{Deserialize, Serialize};

/// A persisted prompt. Identity (`id`) is assigned by the database and
/// never changes; the remaining fields are replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub content: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A draft field, for the IPC boundary. Maps to the typed setters on
/// [`PromptDraft`] so the frontend never sends raw field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Name,
    Description,
    Content,
}

/// Unsaved field values for a create or edit. Has no identity until
/// committed through the prompt service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptDraft {
    pub name: String,
    pub description: String,
    pub content: String,
}

impl PromptDraft {
    /// Create a draft pre-filled from an existing prompt's current fields.
    pub fn from_prompt(prompt: &Prompt) -> Self {
        Self {
            name: prompt.name.clone(),
            description: prompt.description.clone(),
            content: prompt.content.clone(),
        }
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn set_content(&mut self, value: impl Into<String>) {
        self.content = value.into();
    }

    /// Update a single field selected by the IPC-facing enum.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        match field {
            DraftField::Name => self.set_name(value),
            DraftField::Description => self.set_description(value),
            DraftField::Content => self.set_content(value),
        }
    }

    /// Discard all field values.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.description.is_empty() && self.content.is_empty()
    }
}
