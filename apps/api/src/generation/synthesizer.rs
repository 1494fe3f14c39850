//! Document synthesizer. Fills the fixed CV template from a profile and pairs
//! it with a match score.
//!
//! The job description only gates the request (it must be non-blank, checked
//! by the caller). It does not shape the document; tailoring belongs in a
//! future `MatchScorer`/template backend, not here.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::errors::AppError;
use crate::generation::scoring::MatchScorer;
use crate::models::document::GeneratedDocument;
use crate::models::profile::Profile;

const KEY_ACHIEVEMENTS: [&str; 3] = [
    "Tailored application for this specific role",
    "Strong match with required qualifications",
    "ATS-optimized formatting for maximum visibility",
];

pub struct Synthesizer {
    scorer: Arc<dyn MatchScorer>,
}

impl Synthesizer {
    pub fn new(scorer: Arc<dyn MatchScorer>) -> Self {
        Synthesizer { scorer }
    }

    /// Renders the template and draws a score. The two are independent.
    ///
    /// Only fails if the scorer backend fails.
    pub async fn synthesize(
        &self,
        profile: &Profile,
        job_description: &str,
    ) -> Result<GeneratedDocument, AppError> {
        let content = render_document(profile);
        let score = self.scorer.score(profile, job_description).await?;
        debug!(
            "Synthesized {} chars, score {} via {}",
            content.len(),
            score.value(),
            self.scorer.backend()
        );

        Ok(GeneratedDocument {
            content,
            score,
            rating: score.rating(),
            scorer: self.scorer.backend(),
            generated_at: Utc::now(),
        })
    }
}

/// Builds the plain-text CV. Field values are inserted verbatim.
pub fn render_document(profile: &Profile) -> String {
    let mut doc = String::new();

    doc.push_str(&format!("{}\n", profile.full_name));
    doc.push_str(&format!(
        "{} | {} | {}\n\n",
        profile.email, profile.phone, profile.location
    ));

    doc.push_str("PROFESSIONAL SUMMARY\n");
    doc.push_str(&format!(
        "Results-driven professional with strong background in {}. \
         Proven track record in {} with excellent communication and problem-solving abilities.\n\n",
        lead_skill(&profile.skills),
        lead_experience_word(&profile.experience)
    ));

    doc.push_str(&format!("SKILLS\n{}\n\n", profile.skills));
    doc.push_str(&format!("EXPERIENCE\n{}\n\n", profile.experience));
    doc.push_str(&format!("EDUCATION\n{}\n\n", profile.education));

    doc.push_str("KEY ACHIEVEMENTS\n");
    let bullets = KEY_ACHIEVEMENTS
        .iter()
        .map(|line| format!("• {line}"))
        .collect::<Vec<_>>()
        .join("\n");
    doc.push_str(&bullets);

    doc
}

/// Text before the first comma, untrimmed.
fn lead_skill(skills: &str) -> &str {
    skills.split(',').next().unwrap_or("")
}

/// Text before the first space, untrimmed.
fn lead_experience_word(experience: &str) -> &str {
    experience.split(' ').next().unwrap_or("")
}
