//! Integration Tests Module
//!
//! Covers the prompt grid controller's list-synchronization contract and
//! the persistence service backing it.

// Grid controller state machine tests
mod grid_test;

// Prompt persistence service tests (in-memory SQLite)
mod prompt_service_test;
