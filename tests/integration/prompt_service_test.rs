//! Prompt Service Integration Tests
//!
//! CRUD behavior of the persistence layer against an in-memory database.

use prompt_deck::services::prompt::PromptService;
use prompt_deck::storage::Database;
use prompt_deck::{AppError, PromptDraft};

fn service() -> PromptService {
    let db = Database::new_in_memory().unwrap();
    PromptService::from_database(&db)
}

fn draft(name: &str, description: &str, content: &str) -> PromptDraft {
    PromptDraft {
        name: name.to_string(),
        description: description.to_string(),
        content: content.to_string(),
    }
}

#[test]
fn test_create_returns_stored_row_with_id() {
    let service = service();
    let created = service
        .create_prompt(&draft("Summarize", "Short summaries", "Summarize:\n\n{{text}}"))
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, "Summarize");
    assert_eq!(created.description, "Short summaries");
    assert_eq!(created.content, "Summarize:\n\n{{text}}");
    assert!(created.created_at.is_some());
    assert!(created.updated_at.is_some());
}

#[test]
fn test_get_prompt_unknown_id_is_none() {
    let service = service();
    assert!(service.get_prompt(42).unwrap().is_none());
}

#[test]
fn test_list_orders_newest_first() {
    let service = service();
    let a = service.create_prompt(&draft("A", "d", "c")).unwrap();
    let b = service.create_prompt(&draft("B", "d", "c")).unwrap();
    let c = service.create_prompt(&draft("C", "d", "c")).unwrap();

    let ids: Vec<i64> = service
        .list_prompts(None)
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![c.id, b.id, a.id]);
}

#[test]
fn test_update_is_full_replacement() {
    let service = service();
    let created = service.create_prompt(&draft("Old", "old desc", "old body")).unwrap();

    let updated = service
        .update_prompt(created.id, &draft("New", "new desc", "new body"))
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "New");
    assert_eq!(updated.description, "new desc");
    assert_eq!(updated.content, "new body");

    // Only one row exists
    assert_eq!(service.list_prompts(None).unwrap().len(), 1);
}

#[test]
fn test_update_unknown_id_fails() {
    let service = service();
    let err = service.update_prompt(7, &draft("n", "d", "c")).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(err.to_string().contains("Prompt 7"));
}

#[test]
fn test_delete_unknown_id_fails() {
    let service = service();
    let err = service.delete_prompt(7).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn test_delete_then_get_is_none() {
    let service = service();
    let created = service.create_prompt(&draft("Gone", "d", "c")).unwrap();
    service.delete_prompt(created.id).unwrap();
    assert!(service.get_prompt(created.id).unwrap().is_none());
}

#[test]
fn test_validation_covers_all_three_fields() {
    let service = service();

    for bad in [
        draft("", "d", "c"),
        draft("n", "", "c"),
        draft("n", "d", ""),
        draft("  ", "d", "c"),
    ] {
        let err = service.create_prompt(&bad).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "draft: {:?}", bad);
    }

    // Nothing was persisted
    assert!(service.list_prompts(None).unwrap().is_empty());
}

#[test]
fn test_search_matches_any_field() {
    let service = service();
    service
        .create_prompt(&draft("Refactor", "improve structure", "Refactor this code"))
        .unwrap();
    service
        .create_prompt(&draft("Translate", "to another language", "Translate:"))
        .unwrap();

    assert_eq!(service.list_prompts(Some("structure")).unwrap().len(), 1);
    assert_eq!(service.list_prompts(Some("Translate")).unwrap().len(), 1);
    assert_eq!(service.list_prompts(Some("code")).unwrap().len(), 1);
    assert!(service.list_prompts(Some("missing")).unwrap().is_empty());
}

#[test]
fn test_update_bumps_updated_at_only() {
    let service = service();
    let created = service.create_prompt(&draft("Stamp", "d", "c")).unwrap();
    let updated = service
        .update_prompt(created.id, &draft("Stamp", "d", "c2"))
        .unwrap();

    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at.is_some());
}
