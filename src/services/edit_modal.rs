//! Add/edit modal controller.
//!
//! Holds the form state for one open modal, validates on submit, packages
//! the multipart payload, and patches the page model only after the
//! backend confirms — this is the one flow with no optimistic update. On
//! any failure the modal stays open with its fields intact.

use crate::managers::page_model::PageModel;
use crate::services::backend_client::{ConfigAction, ConfigBackend, IconUpload};
use crate::types::errors::ModalError;
use crate::types::icon::DEFAULT_GLYPH;
use crate::types::nav::{ItemKey, Tile, TileId};
use crate::validate;

/// Modal mode, selected at open time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMode {
    /// Creating a new item in the given category.
    Add { category: String },
    /// Editing an existing item; `original` is the identity key the backend
    /// uses to locate it, `target` the tile to patch on success.
    Edit { original: ItemKey, target: TileId },
}

/// The editable form fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    pub category: String,
    pub title: String,
    pub url: String,
    pub icon: Option<IconUpload>,
}

/// State of one open modal.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalState {
    pub mode: ModalMode,
    pub fields: FormFields,
}

pub struct EditModalController {
    open: Option<ModalState>,
}

impl EditModalController {
    pub fn new() -> Self {
        Self { open: None }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn state(&self) -> Option<&ModalState> {
        self.open.as_ref()
    }

    /// Opens the modal in add mode with empty fields, pre-selecting the
    /// category whose add control was clicked.
    pub fn open_add(&mut self, category: &str) {
        self.open = Some(ModalState {
            mode: ModalMode::Add {
                category: category.to_string(),
            },
            fields: FormFields {
                category: category.to_string(),
                ..FormFields::default()
            },
        });
    }

    /// Opens the modal in edit mode, pre-filled from the target's current
    /// values.
    pub fn open_edit(&mut self, target: TileId, original: ItemKey, url: &str) {
        self.open = Some(ModalState {
            fields: FormFields {
                category: original.category.clone(),
                title: original.title.clone(),
                url: url.to_string(),
                icon: None,
            },
            mode: ModalMode::Edit { original, target },
        });
    }

    /// The form fields of the open modal, for the host to mutate as the
    /// user types.
    pub fn fields_mut(&mut self) -> Option<&mut FormFields> {
        self.open.as_mut().map(|s| &mut s.fields)
    }

    /// Closes the modal without submitting (Escape / close / cancel).
    pub fn cancel(&mut self) {
        self.open = None;
    }

    /// Validates the fields, submits to the backend, and patches the page
    /// model on confirmation.
    ///
    /// On success the modal closes. On any error — validation, network, or
    /// patch — the modal stays open with its state intact and the error is
    /// returned for the dispatcher to log.
    pub fn submit(
        &mut self,
        page: &mut PageModel,
        backend: &dyn ConfigBackend,
    ) -> Result<(), ModalError> {
        let state = self.open.as_ref().ok_or(ModalError::NotOpen)?;
        let fields = &state.fields;

        validate::validate_category(&fields.category).map_err(ModalError::Validation)?;
        validate::validate_title(&fields.title).map_err(ModalError::Validation)?;
        validate::validate_url(&fields.url).map_err(ModalError::Validation)?;

        let upload = match &fields.icon {
            Some(upload) => {
                let sanitized = validate::sanitize_filename(&upload.filename);
                validate::validate_icon_filename(&sanitized).map_err(ModalError::Validation)?;
                Some(IconUpload {
                    filename: sanitized,
                    bytes: upload.bytes.clone(),
                })
            }
            None => None,
        };

        let action = match &state.mode {
            ModalMode::Add { .. } => ConfigAction::Add {
                category: fields.category.clone(),
                title: fields.title.clone(),
                url: fields.url.clone(),
                icon: upload.clone(),
            },
            ModalMode::Edit { original, .. } => ConfigAction::Edit {
                old_category: original.category.clone(),
                old_title: original.title.clone(),
                new_category: fields.category.clone(),
                new_title: fields.title.clone(),
                new_url: fields.url.clone(),
                new_icon: upload.clone(),
            },
        };

        backend.submit(&action).map_err(ModalError::Backend)?;

        match &state.mode {
            ModalMode::Add { .. } => {
                // The backend serves the uploaded file under img/; without an
                // upload the tile falls back to the default glyph.
                let icon = match &upload {
                    Some(u) => format!("img/{}", u.filename),
                    None => DEFAULT_GLYPH.to_string(),
                };
                let tile = Tile::new(fields.title.clone(), fields.url.clone(), icon);
                page.insert_tile(&fields.category, tile)
                    .map_err(ModalError::Page)?;
            }
            ModalMode::Edit { original, target } => {
                page.update_tile(target, &fields.title, &fields.url)
                    .map_err(ModalError::Page)?;
                if fields.category != original.category {
                    page.relocate_tile(target, &fields.category)
                        .map_err(ModalError::Page)?;
                }
            }
        }

        self.open = None;
        Ok(())
    }
}

impl Default for EditModalController {
    fn default() -> Self {
        Self::new()
    }
}
