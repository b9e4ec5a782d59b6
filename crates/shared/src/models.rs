use serde::{Deserialize, Serialize};

/// A stored briefing: an uploaded document's derived summary plus metadata.
///
/// Records are immutable once created — the store only ever creates and
/// deletes them. `date` is the creation timestamp as an RFC 3339 string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Briefing {
    pub id: i64,
    pub filename: String,
    pub summary: String,
    pub date: String,
}

impl Briefing {
    pub fn new(id: i64, filename: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id,
            filename: filename.into(),
            summary: summary.into(),
            date: chrono::Utc::now().to_rfc3339(),
        }
    }
}
