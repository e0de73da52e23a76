use serde::{Deserialize, Serialize};

/// One item of a `/search` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub title: String,
    pub url: String,
    pub icon: String,
}
