//! Prompt Service
//!
//! Persistence operations for prompts. This is the external contract the
//! grid controller calls into: create, update, delete, plus list/get for
//! the initial load. All failures surface as `AppError` values with
//! human-readable messages.

use rusqlite::params;

use crate::models::prompt::{Prompt, PromptDraft};
use crate::storage::database::DbPool;
use crate::storage::Database;
use crate::utils::error::{AppError, AppResult};

/// Service for managing persisted prompts
pub struct PromptService {
    pool: DbPool,
}

impl PromptService {
    /// Create a new PromptService with a database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create from a Database reference
    pub fn from_database(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }

    /// List prompts, newest first, with an optional substring search.
    ///
    /// Newest-first ordering means a fresh load agrees with the grid's
    /// prepend-on-create semantics.
    pub fn list_prompts(&self, search: Option<&str>) -> AppResult<Vec<Prompt>> {
        let conn = self
            .pool
            .get()
            .map_err(|e| AppError::database(format!("Failed to get connection: {}", e)))?;

        let mut sql = String::from(
            "SELECT id, name, description, content, created_at, updated_at
             FROM prompts WHERE 1=1",
        );
        let mut params_vec: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(q) = search {
            sql.push_str(" AND (name LIKE ? OR description LIKE ? OR content LIKE ?)");
            let pattern = format!("%{}%", q);
            params_vec.push(Box::new(pattern.clone()));
            params_vec.push(Box::new(pattern.clone()));
            params_vec.push(Box::new(pattern));
        }

        sql.push_str(" ORDER BY id DESC");

        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            params_vec.iter().map(|p| p.as_ref()).collect();

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_refs.as_slice(), row_to_prompt)?;

        let mut prompts = Vec::new();
        for row in rows {
            prompts.push(row?);
        }

        Ok(prompts)
    }

    /// Get a single prompt by id
    pub fn get_prompt(&self, id: i64) -> AppResult<Option<Prompt>> {
        let conn = self
            .pool
            .get()
            .map_err(|e| AppError::database(format!("Failed to get connection: {}", e)))?;

        let result = conn.query_row(
            "SELECT id, name, description, content, created_at, updated_at
             FROM prompts WHERE id = ?1",
            params![id],
            row_to_prompt,
        );

        match result {
            Ok(prompt) => Ok(Some(prompt)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::database(e.to_string())),
        }
    }

    /// Create a new prompt from a draft and return the stored row with
    /// its database-assigned id.
    pub fn create_prompt(&self, draft: &PromptDraft) -> AppResult<Prompt> {
        validate_draft(draft)?;

        let conn = self
            .pool
            .get()
            .map_err(|e| AppError::database(format!("Failed to get connection: {}", e)))?;

        let now = chrono::Utc::now().to_rfc3339();
        conn.execute(
            "INSERT INTO prompts (name, description, content, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)",
            params![draft.name, draft.description, draft.content, now],
        )?;

        let id = conn.last_insert_rowid();
        self.get_prompt(id)?
            .ok_or_else(|| AppError::database("Failed to retrieve created prompt"))
    }

    /// Update an existing prompt, replacing all three fields wholesale.
    /// Fails with NotFound if the id is unknown.
    pub fn update_prompt(&self, id: i64, draft: &PromptDraft) -> AppResult<Prompt> {
        validate_draft(draft)?;

        let conn = self
            .pool
            .get()
            .map_err(|e| AppError::database(format!("Failed to get connection: {}", e)))?;

        let now = chrono::Utc::now().to_rfc3339();
        let changed = conn.execute(
            "UPDATE prompts SET name = ?1, description = ?2, content = ?3, updated_at = ?4
             WHERE id = ?5",
            params![draft.name, draft.description, draft.content, now, id],
        )?;

        if changed == 0 {
            return Err(AppError::not_found(format!("Prompt {}", id)));
        }

        self.get_prompt(id)?
            .ok_or_else(|| AppError::database("Failed to retrieve updated prompt"))
    }

    /// Delete a prompt by id. Fails with NotFound if the id is unknown.
    pub fn delete_prompt(&self, id: i64) -> AppResult<()> {
        let conn = self
            .pool
            .get()
            .map_err(|e| AppError::database(format!("Failed to get connection: {}", e)))?;

        let changed = conn.execute("DELETE FROM prompts WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(AppError::not_found(format!("Prompt {}", id)));
        }

        Ok(())
    }
}

/// Reject drafts with blank fields (the editor marks all three required)
fn validate_draft(draft: &PromptDraft) -> AppResult<()> {
    if draft.name.trim().is_empty() {
        return Err(AppError::validation("Prompt name cannot be empty"));
    }
    if draft.description.trim().is_empty() {
        return Err(AppError::validation("Prompt description cannot be empty"));
    }
    if draft.content.trim().is_empty() {
        return Err(AppError::validation("Prompt content cannot be empty"));
    }
    Ok(())
}

/// Convert a database row to a Prompt
fn row_to_prompt(row: &rusqlite::Row) -> rusqlite::Result<Prompt> {
    Ok(Prompt {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        content: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}
