//! App core for navdash.
//!
//! Central struct holding the page model, the visit tracker, the
//! controllers, and the backend seam. The host constructs it with the
//! sections the backend rendered at page load, then feeds user events
//! through [`crate::events::dispatch_event`].

use crate::managers::page_model::PageModel;
use crate::managers::visit_tracker::{VisitStore, VisitTracker};
use crate::services::backend_client::ConfigBackend;
use crate::services::context_menu::{ContextMenuController, DispatchMode};
use crate::services::edit_modal::EditModalController;
use crate::services::frequent_section::FrequentSectionRenderer;
use crate::services::reorder_controller::ReorderController;
use crate::services::search_controller::{SearchController, ViewState};
use crate::types::nav::{Section, Tile, TileId};

/// Central application struct wiring the managers and controllers.
pub struct App {
    pub page: PageModel,
    pub visit_tracker: VisitTracker,
    pub search: SearchController,
    pub context_menu: ContextMenuController,
    pub edit_modal: EditModalController,
    pub reorder: ReorderController,
    pub backend: Box<dyn ConfigBackend>,
    /// The rendered "frequently used" section; `None` while nothing has
    /// been visited.
    pub frequent: Option<Section>,
}

impl App {
    /// Creates the app from the sections the backend served on page load,
    /// an injected visit store, the backend client, and the context-menu
    /// dispatch mode.
    pub fn new(
        sections: Vec<Section>,
        store: Box<dyn VisitStore>,
        backend: Box<dyn ConfigBackend>,
        dispatch: DispatchMode,
    ) -> Self {
        Self {
            page: PageModel::from_sections(sections),
            visit_tracker: VisitTracker::new(store),
            search: SearchController::new(),
            context_menu: ContextMenuController::new(dispatch),
            edit_modal: EditModalController::new(),
            reorder: ReorderController::new(),
            backend,
            frequent: None,
        }
    }

    /// Startup sequence: the tracker has already loaded its store, so all
    /// that remains is rendering the frequent section once, as the page
    /// does on load.
    pub fn startup(&mut self) {
        self.refresh_frequent();
    }

    /// Re-renders the frequent section from the tracker's current ranking.
    pub fn refresh_frequent(&mut self) {
        self.frequent = FrequentSectionRenderer::render(&self.visit_tracker);
    }

    /// Resolves a tile id against everything currently on screen: the
    /// category sections, the frequent section, and any visible search
    /// results.
    pub fn find_tile(&self, id: &TileId) -> Option<&Tile> {
        if let Some(tile) = self.page.tile(id) {
            return Some(tile);
        }
        if let Some(frequent) = &self.frequent {
            if let Some(tile) = frequent.tiles.iter().find(|t| &t.id == id) {
                return Some(tile);
            }
        }
        if let ViewState::Results(tiles) = self.search.view() {
            if let Some(tile) = tiles.iter().find(|t| &t.id == id) {
                return Some(tile);
            }
        }
        None
    }
}
