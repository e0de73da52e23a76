//! Unit tests for the reorder controller: boundary no-ops, optimistic
//! swaps, symmetric rollback, and full-order commits.

use std::cell::RefCell;

use navdash::managers::page_model::PageModel;
use navdash::services::backend_client::{ConfigAction, ConfigBackend};
use navdash::services::reorder_controller::{MoveOutcome, ReorderController};
use navdash::types::errors::BackendError;
use navdash::types::nav::{Section, Tile, TileId};
use navdash::types::search::SearchResultItem;

/// Backend double recording every submitted action, optionally failing.
struct RecordingBackend {
    actions: RefCell<Vec<ConfigAction>>,
    fail: bool,
}

impl RecordingBackend {
    fn new() -> Self {
        Self {
            actions: RefCell::new(Vec::new()),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            actions: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    fn submitted(&self) -> Vec<ConfigAction> {
        self.actions.borrow().clone()
    }
}

impl ConfigBackend for RecordingBackend {
    fn search(&self, _term: &str) -> Result<Vec<SearchResultItem>, BackendError> {
        Ok(Vec::new())
    }

    fn submit(&self, action: &ConfigAction) -> Result<(), BackendError> {
        self.actions.borrow_mut().push(action.clone());
        if self.fail {
            Err(BackendError::HttpStatus(500))
        } else {
            Ok(())
        }
    }
}

fn sample_page() -> PageModel {
    PageModel::from_sections(vec![Section::with_tiles(
        "Tools",
        vec![
            Tile::new("GitHub", "https://github.com", "fab fa-github"),
            Tile::new("Docs.rs", "https://docs.rs", "fas fa-book"),
            Tile::new("Crates.io", "https://crates.io", "img/crates.png"),
        ],
        true,
    )])
}

fn tile_id(page: &PageModel, index: usize) -> TileId {
    page.sections()[0].tiles[index].id.clone()
}

fn titles(page: &PageModel) -> Vec<String> {
    page.sections()[0].title_order()
}

/// Move-left on the first tile: model unchanged, zero backend calls.
#[test]
fn test_move_left_on_first_tile_is_noop() {
    let mut page = sample_page();
    let backend = RecordingBackend::new();
    let controller = ReorderController::new();
    let id = tile_id(&page, 0);

    let outcome = controller.move_left(&mut page, &backend, &id).unwrap();

    assert_eq!(outcome, MoveOutcome::Boundary);
    assert_eq!(titles(&page), vec!["GitHub", "Docs.rs", "Crates.io"]);
    assert!(backend.submitted().is_empty());
}

/// Move-right on the last tile: model unchanged, zero backend calls. The
/// add control does not count as a tile, so "last" means last real tile.
#[test]
fn test_move_right_on_last_tile_is_noop() {
    let mut page = sample_page();
    let backend = RecordingBackend::new();
    let controller = ReorderController::new();
    let id = tile_id(&page, 2);

    let outcome = controller.move_right(&mut page, &backend, &id).unwrap();

    assert_eq!(outcome, MoveOutcome::Boundary);
    assert_eq!(titles(&page), vec!["GitHub", "Docs.rs", "Crates.io"]);
    assert!(backend.submitted().is_empty());
}

/// A successful move swaps the model and persists the pairwise action
/// keyed by category and title.
#[test]
fn test_move_left_swaps_and_persists() {
    let mut page = sample_page();
    let backend = RecordingBackend::new();
    let controller = ReorderController::new();
    let id = tile_id(&page, 1);

    let outcome = controller.move_left(&mut page, &backend, &id).unwrap();

    assert_eq!(outcome, MoveOutcome::Moved);
    assert_eq!(titles(&page), vec!["Docs.rs", "GitHub", "Crates.io"]);
    assert_eq!(
        backend.submitted(),
        vec![ConfigAction::MoveUp {
            category: "Tools".to_string(),
            title: "Docs.rs".to_string(),
        }]
    );
}

#[test]
fn test_move_right_swaps_and_persists() {
    let mut page = sample_page();
    let backend = RecordingBackend::new();
    let controller = ReorderController::new();
    let id = tile_id(&page, 0);

    let outcome = controller.move_right(&mut page, &backend, &id).unwrap();

    assert_eq!(outcome, MoveOutcome::Moved);
    assert_eq!(titles(&page), vec!["Docs.rs", "GitHub", "Crates.io"]);
    assert_eq!(
        backend.submitted(),
        vec![ConfigAction::MoveDown {
            category: "Tools".to_string(),
            title: "GitHub".to_string(),
        }]
    );
}

/// A failed persistence restores the exact pre-swap order.
#[test]
fn test_move_failure_rolls_back_exactly() {
    let mut page = sample_page();
    let backend = RecordingBackend::failing();
    let controller = ReorderController::new();
    let id = tile_id(&page, 1);

    let before = titles(&page);
    let outcome = controller.move_left(&mut page, &backend, &id).unwrap();

    assert_eq!(outcome, MoveOutcome::RolledBack);
    assert_eq!(titles(&page), before);
    // The request was attempted exactly once — no retries
    assert_eq!(backend.submitted().len(), 1);
}

#[test]
fn test_move_unknown_tile_fails() {
    let mut page = sample_page();
    let backend = RecordingBackend::new();
    let controller = ReorderController::new();

    let result = controller.move_left(&mut page, &backend, &TileId::new());
    assert!(result.is_err());
    assert!(backend.submitted().is_empty());
}

/// A drag result reorders the section and persists the complete order.
#[test]
fn test_commit_order_reorders_and_persists() {
    let mut page = sample_page();
    let backend = RecordingBackend::new();
    let controller = ReorderController::new();

    let order = vec![
        "Crates.io".to_string(),
        "GitHub".to_string(),
        "Docs.rs".to_string(),
    ];
    controller
        .commit_order(&mut page, &backend, "Tools", &order)
        .unwrap();

    assert_eq!(titles(&page), order);
    assert_eq!(
        backend.submitted(),
        vec![ConfigAction::Reorder {
            category: "Tools".to_string(),
            order,
        }]
    );
}

/// Drag persistence has no rollback: on failure the model keeps the new
/// order and drifts from the backend until reload.
#[test]
fn test_commit_order_failure_leaves_new_order() {
    let mut page = sample_page();
    let backend = RecordingBackend::failing();
    let controller = ReorderController::new();

    let order = vec![
        "Docs.rs".to_string(),
        "Crates.io".to_string(),
        "GitHub".to_string(),
    ];
    controller
        .commit_order(&mut page, &backend, "Tools", &order)
        .unwrap();

    assert_eq!(titles(&page), order);
}
