//! Frequent-section renderer.
//!
//! Reads the visit tracker's ranking and produces the "frequently used"
//! section of tiles. Pure read over the tracker; when nothing has been
//! visited the section is absent and stays hidden.

use crate::managers::visit_tracker::{VisitTracker, DEFAULT_TOP_LIMIT};
use crate::types::nav::{Section, Tile};

/// Display name of the frequent section.
pub const FREQUENT_SECTION_NAME: &str = "Frequent";

pub struct FrequentSectionRenderer;

impl FrequentSectionRenderer {
    /// Renders the top [`DEFAULT_TOP_LIMIT`] visited sites, or `None` when
    /// there are no records.
    pub fn render(tracker: &VisitTracker) -> Option<Section> {
        Self::render_limit(tracker, DEFAULT_TOP_LIMIT)
    }

    /// Renders at most `limit` top sites.
    pub fn render_limit(tracker: &VisitTracker, limit: usize) -> Option<Section> {
        let top = tracker.top_visited(limit);
        if top.is_empty() {
            return None;
        }
        let tiles = top
            .into_iter()
            .map(|rec| Tile::new(rec.title, rec.url, rec.icon))
            .collect();
        // No add control: the frequent section is derived, not editable
        Some(Section::with_tiles(FREQUENT_SECTION_NAME, tiles, false))
    }
}
