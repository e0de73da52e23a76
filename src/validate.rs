//! Input validation for add/edit form fields.
//!
//! All checks run client-side before any network call; the backend performs
//! its own validation independently.

use url::Url;

use crate::types::errors::FormError;

/// Characters rejected in titles (markup-significant).
const TITLE_REJECTED: [char; 5] = ['<', '>', '"', '\'', '&'];

/// Characters rejected in category names (markup-significant plus path separators).
const CATEGORY_REJECTED: [char; 7] = ['<', '>', '"', '\'', '&', '/', '\\'];

/// File extensions accepted for uploaded icon images.
const ICON_EXTENSIONS: [&str; 7] = [".png", ".jpg", ".jpeg", ".gif", ".ico", ".svg", ".webp"];

/// Validates a tile title: non-empty after trimming, at most 100 characters,
/// and free of markup-significant characters.
pub fn validate_title(title: &str) -> Result<(), FormError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField("title".to_string()));
    }
    if trimmed.chars().count() > 100 {
        return Err(FormError::InvalidTitle("longer than 100 characters".to_string()));
    }
    if trimmed.chars().any(|c| TITLE_REJECTED.contains(&c)) {
        return Err(FormError::InvalidTitle(format!(
            "contains a rejected character: {}",
            trimmed
        )));
    }
    Ok(())
}

/// Validates a category name: non-empty after trimming, at most 50
/// characters, and free of markup and path-separator characters.
pub fn validate_category(name: &str) -> Result<(), FormError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField("category".to_string()));
    }
    if trimmed.chars().count() > 50 {
        return Err(FormError::InvalidCategory("longer than 50 characters".to_string()));
    }
    if trimmed.chars().any(|c| CATEGORY_REJECTED.contains(&c)) {
        return Err(FormError::InvalidCategory(format!(
            "contains a rejected character: {}",
            trimmed
        )));
    }
    Ok(())
}

/// Validates a tile URL: must parse with both a scheme and a host.
pub fn validate_url(url: &str) -> Result<(), FormError> {
    if url.trim().is_empty() {
        return Err(FormError::MissingField("url".to_string()));
    }
    match Url::parse(url) {
        Ok(parsed) if parsed.has_host() => Ok(()),
        Ok(_) => Err(FormError::InvalidUrl(format!("no host in {}", url))),
        Err(e) => Err(FormError::InvalidUrl(e.to_string())),
    }
}

/// Replaces path separators and shell-unsafe characters in a file name
/// with underscores and caps the length at 255 bytes (extension preserved).
pub fn sanitize_filename(filename: &str) -> String {
    let mut clean: String = filename
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            other => other,
        })
        .collect();

    if clean.len() > 255 {
        let ext_at = clean.rfind('.').unwrap_or(clean.len());
        let ext = clean.split_off(ext_at);
        let mut cut = 255usize.saturating_sub(ext.len());
        while cut > 0 && !clean.is_char_boundary(cut) {
            cut -= 1;
        }
        clean.truncate(cut);
        clean.push_str(&ext);
    }
    clean
}

/// Validates an uploaded icon file name: non-empty, a recognized image
/// extension, and at most 255 bytes.
pub fn validate_icon_filename(filename: &str) -> Result<(), FormError> {
    if filename.is_empty() {
        return Err(FormError::InvalidIconFile("empty file name".to_string()));
    }
    if filename.len() > 255 {
        return Err(FormError::InvalidIconFile("file name too long".to_string()));
    }
    let lower = filename.to_lowercase();
    if !ICON_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        return Err(FormError::InvalidIconFile(format!(
            "unsupported extension: {}",
            filename
        )));
    }
    Ok(())
}
