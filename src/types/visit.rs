use serde::{Deserialize, Serialize};

/// Visit statistics for a single URL.
///
/// Stored in the visit-stats map keyed by `url`; the serialized field names
/// match the on-disk `visitStats` object shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub url: String,
    pub title: String,
    pub icon: String,
    pub count: u32,
    #[serde(rename = "lastVisit")]
    pub last_visit: i64,
}
