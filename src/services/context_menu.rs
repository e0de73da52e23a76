//! Context-menu controller.
//!
//! A two-state machine: closed, or open at a cursor position with exactly
//! one target tile. Opening while open retargets; click-elsewhere, Escape,
//! and action selection all close. Selected actions are resolved against
//! the page model by tile id and either handed to the edit modal, issued
//! as a delete, or turned into a companion config-page URL, depending on
//! the dispatch mode.

use url::Url;

use crate::managers::page_model::PageModel;
use crate::services::backend_client::{ConfigAction, ConfigBackend};
use crate::types::nav::{ItemKey, TileId};

/// Menu visibility state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open { target: TileId, x: i32, y: i32 },
}

/// Actions offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Edit,
    Delete,
}

/// Where menu actions are dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchMode {
    /// Open the in-page edit modal.
    Modal,
    /// Navigate to a companion config page carrying the item's identity.
    CompanionPage { base: String },
}

/// What the host must do after an action was selected.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuDirective {
    /// Open the edit modal pre-filled with the target's current values.
    OpenEditModal {
        target: TileId,
        key: ItemKey,
        url: String,
    },
    /// Navigate to the companion config page.
    Navigate(String),
    /// The backend confirmed the delete and the tile was removed.
    Removed(TileId),
    /// Nothing further to do.
    None,
}

pub struct ContextMenuController {
    state: MenuState,
    dispatch: DispatchMode,
}

impl ContextMenuController {
    pub fn new(dispatch: DispatchMode) -> Self {
        Self {
            state: MenuState::Closed,
            dispatch,
        }
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn target(&self) -> Option<&TileId> {
        match &self.state {
            MenuState::Open { target, .. } => Some(target),
            MenuState::Closed => None,
        }
    }

    /// Opens the menu at the cursor for the given tile. Opening while
    /// already open simply retargets.
    pub fn open_at(&mut self, target: TileId, x: i32, y: i32) {
        self.state = MenuState::Open { target, x, y };
    }

    /// Closes the menu: click elsewhere, Escape, or after an action.
    pub fn close(&mut self) {
        self.state = MenuState::Closed;
    }

    /// Handles a selected menu action against the current target, closing
    /// the menu in every case.
    ///
    /// Delete is optimistic the way the original was: the backend call is
    /// issued, and on success the tile leaves the page model; a failure is
    /// logged and leaves the page unchanged (no rollback path exists).
    pub fn select_action(
        &mut self,
        action: MenuAction,
        page: &mut PageModel,
        backend: &dyn ConfigBackend,
    ) -> MenuDirective {
        let Some(target) = self.target().cloned() else {
            return MenuDirective::None;
        };
        self.close();

        let Some(key) = page.tile_key(&target) else {
            log::warn!("context menu target {} no longer in page", target);
            return MenuDirective::None;
        };
        let Some(tile) = page.tile(&target) else {
            return MenuDirective::None;
        };
        let tile_url = tile.url.clone();

        match action {
            MenuAction::Edit => match &self.dispatch {
                DispatchMode::Modal => MenuDirective::OpenEditModal {
                    target,
                    key,
                    url: tile_url,
                },
                DispatchMode::CompanionPage { base } => {
                    match Self::companion_url(base, &key, &tile_url) {
                        Some(url) => MenuDirective::Navigate(url),
                        None => MenuDirective::None,
                    }
                }
            },
            MenuAction::Delete => {
                let delete = ConfigAction::Delete {
                    category: key.category.clone(),
                    title: key.title.clone(),
                };
                match backend.submit(&delete) {
                    Ok(()) => match page.remove_tile(&target) {
                        Ok(_) => MenuDirective::Removed(target),
                        Err(e) => {
                            log::warn!("delete confirmed but tile vanished: {}", e);
                            MenuDirective::None
                        }
                    },
                    Err(e) => {
                        log::warn!("delete of '{}' failed: {}", key.title, e);
                        MenuDirective::None
                    }
                }
            }
        }
    }

    /// Builds the companion config-page URL carrying the item's identity.
    fn companion_url(base: &str, key: &ItemKey, item_url: &str) -> Option<String> {
        let mut url = match Url::parse(base) {
            Ok(url) => url,
            Err(e) => {
                log::warn!("invalid companion page base '{}': {}", base, e);
                return None;
            }
        };
        url.query_pairs_mut()
            .append_pair("category", &key.category)
            .append_pair("title", &key.title)
            .append_pair("url", item_url);
        Some(url.into())
    }
}
