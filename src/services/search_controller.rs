//! Search-as-you-type controller.
//!
//! Swaps the visible view between the normal categorized sections and a
//! flat list of search-result tiles. Each issued query carries a
//! monotonically increasing token; a response whose token is not the
//! latest is discarded, so a slow response for an old query can never
//! overwrite the results of a newer one.

use crate::services::backend_client::ConfigBackend;
use crate::types::errors::BackendError;
use crate::types::nav::Tile;
use crate::types::search::SearchResultItem;

/// What the dashboard is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// The normal categorized sections plus the frequent section.
    Normal,
    /// Search-result tiles replacing the normal content.
    Results(Vec<Tile>),
}

/// Token identifying one issued search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryToken(u64);

pub struct SearchController {
    latest: u64,
    view: ViewState,
}

impl SearchController {
    pub fn new() -> Self {
        Self {
            latest: 0,
            view: ViewState::Normal,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Registers an input change. An empty term reverts the view to
    /// `Normal` and returns `None`: no request may be issued for it. A
    /// non-empty term invalidates all earlier tokens and returns the token
    /// the eventual response must present.
    pub fn begin_query(&mut self, term: &str) -> Option<QueryToken> {
        if term.is_empty() {
            self.view = ViewState::Normal;
            return None;
        }
        self.latest += 1;
        Some(QueryToken(self.latest))
    }

    /// Applies a search response. Returns `false` (and leaves the view
    /// untouched) when the token is stale. An empty result list reverts
    /// the view to `Normal`.
    pub fn apply_response(&mut self, token: QueryToken, results: Vec<SearchResultItem>) -> bool {
        if token.0 != self.latest {
            log::debug!("discarding stale search response (token {})", token.0);
            return false;
        }
        if results.is_empty() {
            self.view = ViewState::Normal;
        } else {
            let tiles = results
                .into_iter()
                .map(|item| Tile::new(item.title, item.url, item.icon))
                .collect();
            self.view = ViewState::Results(tiles);
        }
        true
    }

    /// The full input-change handler: suppress empty terms, query the
    /// backend, apply the response under the token discipline.
    pub fn on_input(&mut self, term: &str, backend: &dyn ConfigBackend) -> Result<(), BackendError> {
        let Some(token) = self.begin_query(term) else {
            return Ok(());
        };
        let results = backend.search(term)?;
        self.apply_response(token, results);
        Ok(())
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}
