//! Reorder controller.
//!
//! One controller, one discipline: mutate the page model optimistically,
//! then persist. A pairwise move persists `move_up`/`move_down` and rolls
//! the swap back symmetrically when persistence fails; a completed drag
//! persists the full `reorder` list and has no rollback path — a failure
//! leaves the model ahead of the backend until the next reload.

use crate::managers::page_model::PageModel;
use crate::services::backend_client::{ConfigAction, ConfigBackend};
use crate::types::errors::PageError;
use crate::types::nav::TileId;

/// Result of a pairwise move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Swap applied and persisted.
    Moved,
    /// The tile is already at the edge of its section; nothing happened
    /// and no backend call was made.
    Boundary,
    /// Swap applied, persistence failed, swap reverted.
    RolledBack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MoveDirection {
    Left,
    Right,
}

pub struct ReorderController;

impl ReorderController {
    pub fn new() -> Self {
        Self
    }

    /// Swaps the tile with its left neighbor, persisting as `move_up`.
    pub fn move_left(
        &self,
        page: &mut PageModel,
        backend: &dyn ConfigBackend,
        id: &TileId,
    ) -> Result<MoveOutcome, PageError> {
        self.move_by(page, backend, id, MoveDirection::Left)
    }

    /// Swaps the tile with its right neighbor, persisting as `move_down`.
    pub fn move_right(
        &self,
        page: &mut PageModel,
        backend: &dyn ConfigBackend,
        id: &TileId,
    ) -> Result<MoveOutcome, PageError> {
        self.move_by(page, backend, id, MoveDirection::Right)
    }

    fn move_by(
        &self,
        page: &mut PageModel,
        backend: &dyn ConfigBackend,
        id: &TileId,
        direction: MoveDirection,
    ) -> Result<MoveOutcome, PageError> {
        let loc = page
            .locate(id)
            .ok_or_else(|| PageError::TileNotFound(id.to_string()))?;
        let section_len = page
            .section(&loc.section)
            .map(|s| s.tiles.len())
            .unwrap_or(0);

        let neighbor = match direction {
            MoveDirection::Left => {
                if loc.index == 0 {
                    return Ok(MoveOutcome::Boundary);
                }
                loc.index - 1
            }
            MoveDirection::Right => {
                if loc.index + 1 >= section_len {
                    return Ok(MoveOutcome::Boundary);
                }
                loc.index + 1
            }
        };

        let key = page
            .tile_key(id)
            .ok_or_else(|| PageError::TileNotFound(id.to_string()))?;

        // Optimistic swap, then persist
        page.swap_tiles(&loc.section, loc.index, neighbor)?;

        let action = match direction {
            MoveDirection::Left => ConfigAction::MoveUp {
                category: key.category,
                title: key.title,
            },
            MoveDirection::Right => ConfigAction::MoveDown {
                category: key.category,
                title: key.title,
            },
        };

        match backend.submit(&action) {
            Ok(()) => Ok(MoveOutcome::Moved),
            Err(e) => {
                log::warn!("move persistence failed, reverting swap: {}", e);
                page.swap_tiles(&loc.section, neighbor, loc.index)?;
                Ok(MoveOutcome::RolledBack)
            }
        }
    }

    /// Applies the result of a completed drag: the full title order of one
    /// section, excluding the add control (which cannot be dragged).
    ///
    /// The model is reordered first, then the order is persisted. A
    /// persistence failure is logged and swallowed — the model keeps the
    /// new order and drifts from the backend until the next reload.
    pub fn commit_order(
        &self,
        page: &mut PageModel,
        backend: &dyn ConfigBackend,
        category: &str,
        order: &[String],
    ) -> Result<(), PageError> {
        page.set_section_order(category, order)?;

        let action = ConfigAction::Reorder {
            category: category.to_string(),
            order: order.to_vec(),
        };
        if let Err(e) = backend.submit(&action) {
            log::warn!("reorder persistence for '{}' failed: {}", category, e);
        }
        Ok(())
    }
}

impl Default for ReorderController {
    fn default() -> Self {
        Self::new()
    }
}
