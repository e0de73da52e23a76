//! Icon classification shared by every tile renderer.
//!
//! The one cross-cutting rule: an icon string is a font glyph iff it starts
//! with a recognized icon-font namespace prefix; everything else is an image
//! path served under the config prefix.

/// Icon-font namespace prefixes recognized as glyph class lists.
pub const FONT_PREFIXES: [&str; 5] = ["fas ", "fab ", "far ", "fal ", "fa "];

/// Path prefix under which the backend serves uploaded icon images.
pub const IMAGE_URL_PREFIX: &str = "/config/";

/// Glyph used for tiles created without an uploaded icon.
pub const DEFAULT_GLYPH: &str = "fas fa-link";

/// A classified icon reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconRef {
    /// An icon-font class list, rendered as a typed glyph.
    Glyph(String),
    /// A relative image path, rendered as an `<img>` under [`IMAGE_URL_PREFIX`].
    Image(String),
}

impl IconRef {
    /// Classifies a raw icon string from a nav item, visit record, or search
    /// result.
    pub fn classify(icon: &str) -> Self {
        if FONT_PREFIXES.iter().any(|p| icon.starts_with(p)) {
            IconRef::Glyph(icon.to_string())
        } else {
            IconRef::Image(icon.to_string())
        }
    }

    pub fn is_glyph(&self) -> bool {
        matches!(self, IconRef::Glyph(_))
    }

    /// The render target: the class list for a glyph, or the full image URL
    /// for an image path.
    pub fn render_target(&self) -> String {
        match self {
            IconRef::Glyph(class) => class.clone(),
            IconRef::Image(path) => format!("{}{}", IMAGE_URL_PREFIX, path),
        }
    }
}
