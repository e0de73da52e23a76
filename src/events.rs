//! UI event dispatch for navdash.
//!
//! The explicit form of "event listeners attach": the host turns raw input
//! into [`UiEvent`]s and feeds them through [`dispatch_event`], which wires
//! each one to the right controller. Per the error discipline, backend
//! failures on reactive paths are logged and swallowed — the model simply
//! stays (or drifts) where it is; only misuse of the model surfaces as
//! `Err`.

use crate::app::App;
use crate::services::context_menu::{MenuAction, MenuDirective};
use crate::types::nav::TileId;

/// A user-interface event.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// A tile was activated (navigation click).
    TileClicked { id: TileId },
    /// The search input changed.
    SearchInput { term: String },
    /// A tile was right-clicked at the given cursor position.
    ContextMenuRequested { id: TileId, x: i32, y: i32 },
    /// Click elsewhere or Escape while the menu is open.
    MenuDismissed,
    /// A menu entry was selected.
    MenuActionSelected { action: MenuAction },
    /// A section's add control was clicked.
    AddClicked { category: String },
    /// The modal form was submitted.
    ModalSubmitted,
    /// The modal was closed without submitting.
    ModalCancelled,
    /// Move-left control of a tile.
    MoveLeft { id: TileId },
    /// Move-right control of a tile.
    MoveRight { id: TileId },
    /// A drag gesture finished with this complete title order.
    DragCompleted { category: String, order: Vec<String> },
}

/// What the host should do after an event was handled.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    None,
    /// Navigate to the companion config page.
    Navigate(String),
}

/// Dispatches one event through the app.
pub fn dispatch_event(app: &mut App, event: UiEvent) -> Result<EventOutcome, String> {
    match event {
        UiEvent::TileClicked { id } => {
            let Some(tile) = app.find_tile(&id) else {
                return Err(format!("clicked tile not on screen: {}", id));
            };
            let (title, icon, url) = (tile.title.clone(), tile.icon.clone(), tile.url.clone());
            app.visit_tracker.record_visit(&title, &icon, &url);
            Ok(EventOutcome::None)
        }

        UiEvent::SearchInput { term } => {
            if let Err(e) = app.search.on_input(&term, &*app.backend) {
                log::warn!("search for '{}' failed: {}", term, e);
            }
            Ok(EventOutcome::None)
        }

        UiEvent::ContextMenuRequested { id, x, y } => {
            // Only tiles of the editable category sections get a menu;
            // frequent and search tiles are derived views.
            if app.page.tile(&id).is_some() {
                app.context_menu.open_at(id, x, y);
            } else {
                log::debug!("ignoring context menu on non-section tile {}", id);
            }
            Ok(EventOutcome::None)
        }

        UiEvent::MenuDismissed => {
            app.context_menu.close();
            Ok(EventOutcome::None)
        }

        UiEvent::MenuActionSelected { action } => {
            let directive = app
                .context_menu
                .select_action(action, &mut app.page, &*app.backend);
            match directive {
                MenuDirective::OpenEditModal { target, key, url } => {
                    app.edit_modal.open_edit(target, key, &url);
                    Ok(EventOutcome::None)
                }
                MenuDirective::Navigate(url) => Ok(EventOutcome::Navigate(url)),
                MenuDirective::Removed(_) | MenuDirective::None => Ok(EventOutcome::None),
            }
        }

        UiEvent::AddClicked { category } => {
            app.edit_modal.open_add(&category);
            Ok(EventOutcome::None)
        }

        UiEvent::ModalSubmitted => {
            if let Err(e) = app.edit_modal.submit(&mut app.page, &*app.backend) {
                // The modal stays open with its fields intact
                log::warn!("modal submission failed: {}", e);
            }
            Ok(EventOutcome::None)
        }

        UiEvent::ModalCancelled => {
            app.edit_modal.cancel();
            Ok(EventOutcome::None)
        }

        UiEvent::MoveLeft { id } => {
            app.reorder
                .move_left(&mut app.page, &*app.backend, &id)
                .map_err(|e| e.to_string())?;
            Ok(EventOutcome::None)
        }

        UiEvent::MoveRight { id } => {
            app.reorder
                .move_right(&mut app.page, &*app.backend, &id)
                .map_err(|e| e.to_string())?;
            Ok(EventOutcome::None)
        }

        UiEvent::DragCompleted { category, order } => {
            app.reorder
                .commit_order(&mut app.page, &*app.backend, &category, &order)
                .map_err(|e| e.to_string())?;
            Ok(EventOutcome::None)
        }
    }
}
