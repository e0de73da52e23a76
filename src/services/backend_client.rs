//! HTTP client for the dashboard backend.
//!
//! The backend is an external collaborator exposing `GET /search` and
//! `POST /config`; this module is the one seam through which the
//! controllers reach it. `ConfigBackend` is the trait the controllers
//! depend on, `HttpBackend` the production implementation over a blocking
//! `reqwest` client. Every call is best-effort, at-most-once, no retries.

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use url::Url;

use crate::types::errors::BackendError;
use crate::types::search::SearchResultItem;

/// An icon image uploaded through the add/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// The complete action vocabulary of the `POST /config` endpoint.
///
/// `Add` and `Edit` are sent as multipart (they may carry an icon file);
/// the rest are form-encoded.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigAction {
    Add {
        category: String,
        title: String,
        url: String,
        icon: Option<IconUpload>,
    },
    Edit {
        old_category: String,
        old_title: String,
        new_category: String,
        new_title: String,
        new_url: String,
        new_icon: Option<IconUpload>,
    },
    Delete {
        category: String,
        title: String,
    },
    Reorder {
        category: String,
        order: Vec<String>,
    },
    MoveUp {
        category: String,
        title: String,
    },
    MoveDown {
        category: String,
        title: String,
    },
}

impl ConfigAction {
    /// The wire value of the `action` field.
    pub fn action_name(&self) -> &'static str {
        match self {
            ConfigAction::Add { .. } => "add",
            ConfigAction::Edit { .. } => "edit",
            ConfigAction::Delete { .. } => "delete",
            ConfigAction::Reorder { .. } => "reorder",
            ConfigAction::MoveUp { .. } => "move_up",
            ConfigAction::MoveDown { .. } => "move_down",
        }
    }

    /// Whether this action is sent as a multipart request.
    pub fn is_multipart(&self) -> bool {
        matches!(self, ConfigAction::Add { .. } | ConfigAction::Edit { .. })
    }

    /// Flat key/value pairs for the form-encoded actions. The reorder list
    /// repeats the `order[]` key once per title, in order.
    ///
    /// Multipart actions do not use this encoding; see
    /// [`HttpBackend::multipart_form`].
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![("action".to_string(), self.action_name().to_string())];
        match self {
            ConfigAction::Delete { category, title }
            | ConfigAction::MoveUp { category, title }
            | ConfigAction::MoveDown { category, title } => {
                fields.push(("category".to_string(), category.clone()));
                fields.push(("title".to_string(), title.clone()));
            }
            ConfigAction::Reorder { category, order } => {
                fields.push(("category".to_string(), category.clone()));
                for title in order {
                    fields.push(("order[]".to_string(), title.clone()));
                }
            }
            ConfigAction::Add { .. } | ConfigAction::Edit { .. } => {}
        }
        fields
    }
}

/// The backend seam the controllers depend on.
pub trait ConfigBackend {
    /// `GET /search?term=<term>`. Callers never pass an empty term — the
    /// search controller suppresses the call instead.
    fn search(&self, term: &str) -> Result<Vec<SearchResultItem>, BackendError>;

    /// `POST /config` with the given action.
    fn submit(&self, action: &ConfigAction) -> Result<(), BackendError>;
}

/// Production backend over HTTP.
pub struct HttpBackend {
    base: Url,
    client: Client,
}

impl HttpBackend {
    /// Creates a backend rooted at `base_url` (e.g. `http://127.0.0.1:5050/`).
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        let base = Url::parse(base_url).map_err(|e| BackendError::InvalidUrl(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(BackendError::InvalidUrl(format!(
                "cannot be a base: {}",
                base_url
            )));
        }
        Ok(Self {
            base,
            client: Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        self.base
            .join(path)
            .map_err(|e| BackendError::InvalidUrl(e.to_string()))
    }

    /// Builds the multipart body for `add` and `edit`.
    fn multipart_form(action: &ConfigAction) -> Form {
        let form = Form::new().text("action", action.action_name());
        match action {
            ConfigAction::Add {
                category,
                title,
                url,
                icon,
            } => {
                let mut form = form
                    .text("category", category.clone())
                    .text("title", title.clone())
                    .text("url", url.clone());
                if let Some(upload) = icon {
                    form = form.part(
                        "icon",
                        Part::bytes(upload.bytes.clone()).file_name(upload.filename.clone()),
                    );
                }
                form
            }
            ConfigAction::Edit {
                old_category,
                old_title,
                new_category,
                new_title,
                new_url,
                new_icon,
            } => {
                let mut form = form
                    .text("old_category", old_category.clone())
                    .text("old_title", old_title.clone())
                    .text("new_category", new_category.clone())
                    .text("new_title", new_title.clone())
                    .text("new_url", new_url.clone());
                if let Some(upload) = new_icon {
                    form = form.part(
                        "new_icon",
                        Part::bytes(upload.bytes.clone()).file_name(upload.filename.clone()),
                    );
                }
                form
            }
            _ => form,
        }
    }
}

impl ConfigBackend for HttpBackend {
    fn search(&self, term: &str) -> Result<Vec<SearchResultItem>, BackendError> {
        let mut url = self.endpoint("search")?;
        url.query_pairs_mut().append_pair("term", term);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| BackendError::NetworkError(e.to_string()))?;
        if !response.status().is_success() {
            return Err(BackendError::HttpStatus(response.status().as_u16()));
        }
        response
            .json::<Vec<SearchResultItem>>()
            .map_err(|e| BackendError::MalformedResponse(e.to_string()))
    }

    fn submit(&self, action: &ConfigAction) -> Result<(), BackendError> {
        let url = self.endpoint("config")?;
        let request = self.client.post(url);
        let response = if action.is_multipart() {
            request.multipart(Self::multipart_form(action)).send()
        } else {
            request.form(&action.form_fields()).send()
        }
        .map_err(|e| BackendError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BackendError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}
