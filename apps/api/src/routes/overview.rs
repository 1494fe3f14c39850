//! Static landing copy: headline, feature cards and the integrations that are
//! announced but not built yet.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedIntegration {
    pub name: &'static str,
    pub description: &'static str,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub headline: &'static str,
    pub tagline: &'static str,
    pub highlights: Vec<Feature>,
    pub features: Vec<Feature>,
    pub planned_integrations: Vec<PlannedIntegration>,
}

pub fn overview() -> Overview {
    Overview {
        headline: "Empowering South African Job Seekers",
        tagline: "ATS-optimized CV generation, automated job matching, and WhatsApp support \
                  for remote communities across South Africa.",
        highlights: vec![
            Feature {
                title: "Community Focused",
                description: "Supporting Khoi, San, and other remote communities with accessible job search tools",
            },
            Feature {
                title: "ATS Optimized",
                description: "Generate CVs with 80%+ ATS match scores using job-specific keywords",
            },
            Feature {
                title: "WhatsApp Ready",
                description: "Receive job matches and apply directly through WhatsApp - no internet required",
            },
        ],
        features: vec![
            Feature {
                title: "WhatsApp Integration",
                description: "No internet browsing needed - everything works through WhatsApp",
            },
            Feature {
                title: "Mobile-First Design",
                description: "Perfect for users with limited data and basic smartphones",
            },
            Feature {
                title: "Community Focused",
                description: "Supporting remote communities including Khoi and San populations",
            },
            Feature {
                title: "POPIA Compliant",
                description: "Secure, private, and fully compliant with South African data protection",
            },
        ],
        planned_integrations: vec![
            PlannedIntegration {
                name: "Backend Integration",
                description: "Database storage for user profiles and CVs",
                available: false,
            },
            PlannedIntegration {
                name: "WhatsApp Bot Setup",
                description: "WhatsApp Business API for job notifications",
                available: false,
            },
            PlannedIntegration {
                name: "Job Scanning API",
                description: "Automated job board scanning and matching",
                available: false,
            },
            PlannedIntegration {
                name: "LLM Integration",
                description: "AI-powered CV generation and ATS optimization",
                available: false,
            },
        ],
    }
}

/// GET /api/v1/overview
pub async fn overview_handler() -> Json<Overview> {
    Json(overview())
}
