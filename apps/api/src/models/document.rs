use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::generation::scoring::MatchScore;

/// A synthesized CV. Lives in memory only and is replaced by the next generation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDocument {
    pub content: String,
    pub score: MatchScore,
    pub rating: &'static str,
    pub scorer: &'static str,
    pub generated_at: DateTime<Utc>,
}
