//! Grid Controller Integration Tests
//!
//! Exercises the full submit/delete round trips the command layer drives:
//! begin, persistence call against an in-memory database, record. Verifies
//! the collection-reconciliation contract end to end.

use prompt_deck::services::grid::{DialogState, PromptGrid, SubmitTarget};
use prompt_deck::services::prompt::PromptService;
use prompt_deck::storage::Database;
use prompt_deck::{DraftField, Prompt, PromptDraft};

fn setup() -> (PromptService, PromptGrid) {
    let db = Database::new_in_memory().unwrap();
    let service = PromptService::from_database(&db);
    let mut grid = PromptGrid::new();
    grid.load(service.list_prompts(None).unwrap());
    (service, grid)
}

fn fill_draft(grid: &mut PromptGrid, name: &str) {
    grid.set_draft_field(DraftField::Name, name);
    grid.set_draft_field(DraftField::Description, format!("{} description", name));
    grid.set_draft_field(DraftField::Content, format!("{} content", name));
}

/// Drive a full submit round trip the way the submit_editor command does.
fn submit(service: &PromptService, grid: &mut PromptGrid) {
    let target = grid.begin_submit().unwrap();
    let result = match target {
        SubmitTarget::Create(draft) => service.create_prompt(&draft),
        SubmitTarget::Update(id, draft) => service.update_prompt(id, &draft),
    };
    match result {
        Ok(saved) => grid.record_saved(saved),
        Err(e) => grid.record_save_error(e.to_string()),
    }
}

// ============================================================================
// Create
// ============================================================================

#[test]
fn test_successful_create_prepends_at_index_zero() {
    let (service, mut grid) = setup();

    grid.open_create().unwrap();
    fill_draft(&mut grid, "First");
    submit(&service, &mut grid);

    grid.open_create().unwrap();
    fill_draft(&mut grid, "Second");
    submit(&service, &mut grid);

    assert_eq!(grid.prompts().len(), 2);
    assert_eq!(grid.prompts()[0].name, "Second");
    assert_eq!(grid.prompts()[1].name, "First");
    assert_eq!(grid.dialog(), DialogState::Closed);
    assert!(grid.draft().is_empty());
}

#[test]
fn test_failed_create_leaves_collection_identical() {
    let (service, mut grid) = setup();
    grid.open_create().unwrap();
    fill_draft(&mut grid, "Good");
    submit(&service, &mut grid);

    let before: Vec<Prompt> = grid.prompts().to_vec();

    grid.open_create().unwrap();
    // Blank name fails service-side validation
    grid.set_draft_field(DraftField::Description, "d");
    grid.set_draft_field(DraftField::Content, "c");
    submit(&service, &mut grid);

    assert_eq!(grid.prompts(), before.as_slice());
    assert_eq!(grid.dialog(), DialogState::Creating);
    assert!(grid.save_error().unwrap().contains("Validation error"));
    assert!(!grid.is_submitting());
}

// ============================================================================
// Update
// ============================================================================

#[test]
fn test_successful_update_replaces_matching_entry_only() {
    let (service, mut grid) = setup();
    for name in ["One", "Two", "Three"] {
        grid.open_create().unwrap();
        fill_draft(&mut grid, name);
        submit(&service, &mut grid);
    }

    let target_id = grid.prompts()[1].id; // "Two"
    let untouched: Vec<Prompt> = grid
        .prompts()
        .iter()
        .filter(|p| p.id != target_id)
        .cloned()
        .collect();

    grid.begin_edit(target_id).unwrap();
    fill_draft(&mut grid, "Renamed");
    submit(&service, &mut grid);

    assert_eq!(grid.prompts().len(), 3);
    let updated = grid.prompts().iter().find(|p| p.id == target_id).unwrap();
    assert_eq!(updated.name, "Renamed");
    for other in &untouched {
        let still = grid.prompts().iter().find(|p| p.id == other.id).unwrap();
        assert_eq!(still.name, other.name);
    }
}

#[test]
fn test_update_scenario_rename_a_to_b() {
    let (service, mut grid) = setup();
    grid.open_create().unwrap();
    fill_draft(&mut grid, "A");
    submit(&service, &mut grid);
    let id = grid.prompts()[0].id;

    grid.begin_edit(id).unwrap();
    grid.set_draft_field(DraftField::Name, "B");
    submit(&service, &mut grid);

    assert_eq!(grid.prompts().len(), 1);
    assert_eq!(grid.prompts()[0].id, id);
    assert_eq!(grid.prompts()[0].name, "B");
}

#[test]
fn test_failed_update_keeps_dialog_open_with_error() {
    let (service, mut grid) = setup();
    grid.open_create().unwrap();
    fill_draft(&mut grid, "Stable");
    submit(&service, &mut grid);

    let before: Vec<Prompt> = grid.prompts().to_vec();
    let id = before[0].id;

    grid.begin_edit(id).unwrap();
    grid.set_draft_field(DraftField::Name, "   ");
    submit(&service, &mut grid);

    assert_eq!(grid.prompts(), before.as_slice());
    assert_eq!(grid.dialog(), DialogState::Editing(id));
    assert!(grid.save_error().is_some());
    // The draft keeps the rejected value so the user can fix it
    assert_eq!(grid.draft().name, "   ");
}

#[test]
fn test_update_survives_dialog_close_while_saving() {
    let (service, mut grid) = setup();
    grid.open_create().unwrap();
    fill_draft(&mut grid, "A");
    submit(&service, &mut grid);
    let id = grid.prompts()[0].id;

    grid.begin_edit(id).unwrap();
    grid.set_draft_field(DraftField::Name, "B");
    let target = grid.begin_submit().unwrap();
    // The editor is dismissed while the persistence call is in flight
    grid.close_dialog();

    let saved = match target {
        SubmitTarget::Create(draft) => service.create_prompt(&draft),
        SubmitTarget::Update(id, draft) => service.update_prompt(id, &draft),
    }
    .unwrap();
    grid.record_saved(saved);

    let ids: Vec<i64> = grid.prompts().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![id]);
    assert_eq!(grid.prompts()[0].name, "B");
    assert_eq!(grid.dialog(), DialogState::Closed);
}

// ============================================================================
// Delete
// ============================================================================

#[test]
fn test_successful_delete_removes_exactly_one() {
    let (service, mut grid) = setup();
    for name in ["Keep", "Drop"] {
        grid.open_create().unwrap();
        fill_draft(&mut grid, name);
        submit(&service, &mut grid);
    }

    let doomed = grid.prompts()[0].id; // "Drop"
    grid.request_delete(doomed).unwrap();
    let id = grid.begin_delete().unwrap();
    match service.delete_prompt(id) {
        Ok(()) => grid.record_deleted(id),
        Err(e) => grid.record_delete_error(e.to_string()),
    }

    assert_eq!(grid.prompts().len(), 1);
    assert_eq!(grid.prompts()[0].name, "Keep");
    assert_eq!(grid.dialog(), DialogState::Closed);
    assert!(service.get_prompt(doomed).unwrap().is_none());
}

#[test]
fn test_failed_delete_keeps_target_set() {
    let (service, mut grid) = setup();
    grid.open_create().unwrap();
    fill_draft(&mut grid, "Survivor");
    submit(&service, &mut grid);

    let id = grid.prompts()[0].id;
    let before: Vec<Prompt> = grid.prompts().to_vec();

    grid.request_delete(id).unwrap();
    // Row vanished underneath us: the delete call reports NotFound and
    // the confirmation dialog must stay open with its target intact.
    service.delete_prompt(id).unwrap();
    let claimed = grid.begin_delete().unwrap();
    match service.delete_prompt(claimed) {
        Ok(()) => grid.record_deleted(claimed),
        Err(e) => grid.record_delete_error(e.to_string()),
    }

    assert_eq!(grid.prompts(), before.as_slice());
    assert_eq!(grid.dialog(), DialogState::ConfirmingDelete(id));
    assert!(grid.delete_error().unwrap().contains("Not found"));
    assert!(!grid.is_deleting());
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_scenario_foo_matches_foobar_only() {
    let (service, mut grid) = setup();
    for name in ["Foobar", "baz"] {
        grid.open_create().unwrap();
        fill_draft(&mut grid, name);
        submit(&service, &mut grid);
    }

    grid.set_search("foo");
    let visible = grid.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Foobar");
}

#[test]
fn test_search_matches_description_and_content() {
    let (service, mut grid) = setup();
    grid.open_create().unwrap();
    grid.set_draft_field(DraftField::Name, "Plain");
    grid.set_draft_field(DraftField::Description, "Explains TRICKY parts");
    grid.set_draft_field(DraftField::Content, "Walk through the snippet");
    submit(&service, &mut grid);

    grid.set_search("tricky");
    assert_eq!(grid.visible().len(), 1);

    grid.set_search("snippet");
    assert_eq!(grid.visible().len(), 1);

    grid.set_search("absent");
    assert!(grid.visible().is_empty());
}

#[test]
fn test_empty_search_returns_full_collection_in_order() {
    let (service, mut grid) = setup();
    for name in ["One", "Two"] {
        grid.open_create().unwrap();
        fill_draft(&mut grid, name);
        submit(&service, &mut grid);
    }

    grid.set_search("one");
    grid.set_search("");
    let visible = grid.visible();
    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0].name, "Two");
    assert_eq!(visible[1].name, "One");
}

// ============================================================================
// Reload agreement
// ============================================================================

#[test]
fn test_fresh_load_matches_incremental_order() {
    let (service, mut grid) = setup();
    for name in ["One", "Two", "Three"] {
        grid.open_create().unwrap();
        fill_draft(&mut grid, name);
        submit(&service, &mut grid);
    }
    let incremental: Vec<i64> = grid.prompts().iter().map(|p| p.id).collect();

    let mut fresh = PromptGrid::new();
    fresh.load(service.list_prompts(None).unwrap());
    let reloaded: Vec<i64> = fresh.prompts().iter().map(|p| p.id).collect();

    assert_eq!(incremental, reloaded);
}

// ============================================================================
// Dialog state union
// ============================================================================

#[test]
fn test_dialog_union_has_single_active_state() {
    let (service, mut grid) = setup();
    grid.open_create().unwrap();
    fill_draft(&mut grid, "Only");
    submit(&service, &mut grid);
    let id = grid.prompts()[0].id;

    grid.begin_edit(id).unwrap();
    assert_eq!(grid.dialog(), DialogState::Editing(id));

    // Requesting a delete replaces the editor state outright
    grid.request_delete(id).unwrap();
    assert_eq!(grid.dialog(), DialogState::ConfirmingDelete(id));

    grid.cancel_delete();
    assert_eq!(grid.dialog(), DialogState::Closed);
}

#[test]
fn test_close_dialog_discards_unsaved_edits() {
    let (service, mut grid) = setup();
    grid.open_create().unwrap();
    fill_draft(&mut grid, "Kept");
    submit(&service, &mut grid);
    let id = grid.prompts()[0].id;

    grid.begin_edit(id).unwrap();
    grid.set_draft_field(DraftField::Name, "Discarded");
    grid.close_dialog();

    assert_eq!(grid.prompts()[0].name, "Kept");
    assert!(grid.draft().is_empty());

    // Reopening loads the stored fields, not the discarded draft
    grid.begin_edit(id).unwrap();
    assert_eq!(grid.draft().name, "Kept");
}

#[test]
fn test_snapshot_round_trips_through_serde() {
    let (service, mut grid) = setup();
    grid.open_create().unwrap();
    fill_draft(&mut grid, "Serialized");
    submit(&service, &mut grid);
    grid.set_search("seri");

    let snapshot = grid.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: prompt_deck::GridSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(back.prompts.len(), 1);
    assert_eq!(back.total, 1);
    assert_eq!(back.search, "seri");
    assert_eq!(back.dialog, DialogState::Closed);
}

#[test]
fn test_draft_round_trip_helper() {
    let draft = PromptDraft {
        name: "n".into(),
        description: "d".into(),
        content: "c".into(),
    };
    let json = serde_json::to_string(&draft).unwrap();
    let back: PromptDraft = serde_json::from_str(&json).unwrap();
    assert_eq!(draft, back);
}
