use std::fmt;

// === VisitStoreError ===

/// Errors related to visit-statistics persistence.
#[derive(Debug)]
pub enum VisitStoreError {
    /// An I/O error occurred while reading or writing the store.
    IoError(String),
    /// Failed to serialize or deserialize the visit-stats map.
    SerializationError(String),
    /// Database operation failed.
    DatabaseError(String),
}

impl fmt::Display for VisitStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisitStoreError::IoError(msg) => write!(f, "Visit store I/O error: {}", msg),
            VisitStoreError::SerializationError(msg) => {
                write!(f, "Visit store serialization error: {}", msg)
            }
            VisitStoreError::DatabaseError(msg) => {
                write!(f, "Visit store database error: {}", msg)
            }
        }
    }
}

impl std::error::Error for VisitStoreError {}

// === BackendError ===

/// Errors related to the `/search` and `/config` backend endpoints.
#[derive(Debug)]
pub enum BackendError {
    /// A network error occurred while talking to the backend.
    NetworkError(String),
    /// The backend responded with a non-success HTTP status.
    HttpStatus(u16),
    /// The response body could not be parsed.
    MalformedResponse(String),
    /// The configured base URL or a derived endpoint URL is invalid.
    InvalidUrl(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::NetworkError(msg) => write!(f, "Backend network error: {}", msg),
            BackendError::HttpStatus(code) => write!(f, "Backend returned HTTP {}", code),
            BackendError::MalformedResponse(msg) => {
                write!(f, "Malformed backend response: {}", msg)
            }
            BackendError::InvalidUrl(msg) => write!(f, "Invalid backend URL: {}", msg),
        }
    }
}

impl std::error::Error for BackendError {}

// === PageError ===

/// Errors related to page-model operations.
#[derive(Debug)]
pub enum PageError {
    /// No tile with the given ID exists in the page model.
    TileNotFound(String),
    /// No section with the given name exists in the page model.
    SectionNotFound(String),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::TileNotFound(id) => write!(f, "Tile not found: {}", id),
            PageError::SectionNotFound(name) => write!(f, "Section not found: {}", name),
        }
    }
}

impl std::error::Error for PageError {}

// === FormError ===

/// Errors related to add/edit form validation.
#[derive(Debug)]
pub enum FormError {
    /// A required field is empty.
    MissingField(String),
    /// The title is too long or contains rejected characters.
    InvalidTitle(String),
    /// The category name is too long or contains rejected characters.
    InvalidCategory(String),
    /// The URL does not parse with a scheme and a host.
    InvalidUrl(String),
    /// The icon file name has a disallowed extension or shape.
    InvalidIconFile(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingField(field) => write!(f, "Missing required field: {}", field),
            FormError::InvalidTitle(msg) => write!(f, "Invalid title: {}", msg),
            FormError::InvalidCategory(msg) => write!(f, "Invalid category: {}", msg),
            FormError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            FormError::InvalidIconFile(msg) => write!(f, "Invalid icon file: {}", msg),
        }
    }
}

impl std::error::Error for FormError {}

// === ModalError ===

/// Errors surfaced by the edit-modal controller on submission.
#[derive(Debug)]
pub enum ModalError {
    /// Submit was called while no modal is open.
    NotOpen,
    /// A form field failed validation; nothing was sent.
    Validation(FormError),
    /// The backend rejected or never received the submission.
    Backend(BackendError),
    /// The page model could not be patched after a confirmed submission.
    Page(PageError),
}

impl fmt::Display for ModalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModalError::NotOpen => write!(f, "No modal is open"),
            ModalError::Validation(e) => write!(f, "Form validation failed: {}", e),
            ModalError::Backend(e) => write!(f, "Submission failed: {}", e),
            ModalError::Page(e) => write!(f, "Page update failed: {}", e),
        }
    }
}

impl std::error::Error for ModalError {}
