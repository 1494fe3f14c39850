//! Match scoring: a pluggable, trait-based scorer producing the ATS match score
//! shown next to a generated CV.
//!
//! Default: `RandomMatchScorer`, a uniform draw from 80..=100 that ignores its
//! inputs. `AppState` holds an `Arc<dyn MatchScorer>`, so a real keyword or
//! semantic scorer can replace it without touching the generation workflow.

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::Profile;

pub const MIN_MATCH_SCORE: u32 = 80;
pub const MAX_MATCH_SCORE: u32 = 100;

/// Integer match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MatchScore(u32);

impl MatchScore {
    /// Clamps into 0..=100.
    pub fn new(value: u32) -> Self {
        MatchScore(value.min(100))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Label shown under the score.
    pub fn rating(self) -> &'static str {
        match self.0 {
            s if s >= 90 => "Excellent match!",
            s if s >= 80 => "Very good match",
            _ => "Good match",
        }
    }
}

/// Implement this to swap scoring backends without touching the handlers.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn score(&self, profile: &Profile, job_description: &str)
        -> Result<MatchScore, AppError>;

    /// Short backend label, echoed in responses.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// RandomMatchScorer
// ────────────────────────────────────────────────────────────────────────────

/// Uniform draw over `MIN_MATCH_SCORE..=MAX_MATCH_SCORE`. Never fails.
///
/// Randomness comes from the OS-seeded bits of a v4 UUID.
pub struct RandomMatchScorer;

#[async_trait]
impl MatchScorer for RandomMatchScorer {
    async fn score(
        &self,
        _profile: &Profile,
        _job_description: &str,
    ) -> Result<MatchScore, AppError> {
        Ok(draw_score(Uuid::new_v4()))
    }

    fn backend(&self) -> &'static str {
        "random"
    }
}

fn draw_score(seed: Uuid) -> MatchScore {
    let span = u128::from(MAX_MATCH_SCORE - MIN_MATCH_SCORE + 1);
    // 122 random bits; the modulo bias over 21 buckets is negligible.
    let offset = (seed.as_u128() % span) as u32;
    MatchScore::new(MIN_MATCH_SCORE + offset)
}

// ────────────────────────────────────────────────────────────────────────────
// FixedMatchScorer
// ────────────────────────────────────────────────────────────────────────────

/// Always returns the same score. Used for demos and deterministic tests.
pub struct FixedMatchScorer(MatchScore);

impl FixedMatchScorer {
    /// Pins the score, clamped into `MIN_MATCH_SCORE..=MAX_MATCH_SCORE`.
    pub fn new(value: u32) -> Self {
        let value = value.clamp(MIN_MATCH_SCORE, MAX_MATCH_SCORE);
        FixedMatchScorer(MatchScore::new(value))
    }
}

#[async_trait]
impl MatchScorer for FixedMatchScorer {
    async fn score(
        &self,
        _profile: &Profile,
        _job_description: &str,
    ) -> Result<MatchScore, AppError> {
        Ok(self.0)
    }

    fn backend(&self) -> &'static str {
        "fixed"
    }
}
