use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identity of a rendered tile.
///
/// Generated when the tile enters the page model and carried through every
/// event payload, so handlers never have to re-derive identity from rendered
/// attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(String);

impl TileId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity key the backend uses to locate a navigation item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemKey {
    pub category: String,
    pub title: String,
}

impl ItemKey {
    pub fn new(category: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            title: title.into(),
        }
    }
}

/// One rendered tile in the page model.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub id: TileId,
    pub title: String,
    pub url: String,
    pub icon: String,
}

impl Tile {
    pub fn new(title: impl Into<String>, url: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: TileId::new(),
            title: title.into(),
            url: url.into(),
            icon: icon.into(),
        }
    }
}

/// A named category grid of tiles, optionally ending in an "add" control.
///
/// The add control is a flag, not a tile: ordering operations work on
/// `tiles` alone, so the control can never be reordered or counted.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: String,
    pub tiles: Vec<Tile>,
    pub has_add_control: bool,
}

impl Section {
    pub fn new(name: impl Into<String>, has_add_control: bool) -> Self {
        Self {
            name: name.into(),
            tiles: Vec::new(),
            has_add_control,
        }
    }

    pub fn with_tiles(name: impl Into<String>, tiles: Vec<Tile>, has_add_control: bool) -> Self {
        Self {
            name: name.into(),
            tiles,
            has_add_control,
        }
    }

    /// Titles of the tiles in display order (the add control is excluded by
    /// construction).
    pub fn title_order(&self) -> Vec<String> {
        self.tiles.iter().map(|t| t.title.clone()).collect()
    }
}
