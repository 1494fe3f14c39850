//! Community impact figures from the pilot programme.
//!
//! All numbers are fixed. The only derivations are the per-community user
//! counts and progress bars, which fall off by list position.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactStats {
    pub active_users: u32,
    pub cvs_generated: u32,
    pub job_applications: u32,
    pub avg_ats_score: u32,
    pub whatsapp_messages: u32,
    pub interview_callbacks: u32,
    pub communities_served: [&'static str; 3],
    pub weekly_growth_pct: u32,
}

pub const TRIAL_STATS: ImpactStats = ImpactStats {
    active_users: 10,
    cvs_generated: 47,
    job_applications: 89,
    avg_ats_score: 87,
    whatsapp_messages: 156,
    interview_callbacks: 12,
    communities_served: ["Kimberley", "Upington", "Springbok"],
    weekly_growth_pct: 15,
};

const INTERVIEW_CALLBACK_RATE_PCT: f64 = 13.5;
const USER_ENGAGEMENT_PCT: f64 = 92.0;
const PROGRESS_PER_USER: u32 = 30;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommunityImpact {
    pub name: &'static str,
    pub users: u32,
    /// Percent, 0..=100.
    pub progress: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuccessMetric {
    pub label: &'static str,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImpactReport {
    pub active_users: u32,
    pub weekly_growth_pct: u32,
    pub cvs_generated: u32,
    pub avg_ats_score: u32,
    pub job_applications: u32,
    pub interview_callbacks: u32,
    pub whatsapp_messages: u32,
    pub communities: Vec<CommunityImpact>,
    pub success_metrics: Vec<SuccessMetric>,
}

impl ImpactStats {
    /// Users shown for the community at `index` (3, 2, 1, ...).
    fn community_users(&self, index: usize) -> u32 {
        (self.communities_served.len() - index) as u32
    }

    pub fn communities(&self) -> Vec<CommunityImpact> {
        self.communities_served
            .iter()
            .enumerate()
            .map(|(index, &name)| {
                let users = self.community_users(index);
                CommunityImpact {
                    name,
                    users,
                    progress: users * PROGRESS_PER_USER,
                }
            })
            .collect()
    }

    pub fn success_metrics(&self) -> Vec<SuccessMetric> {
        vec![
            SuccessMetric {
                label: "ATS Match Rate",
                percent: f64::from(self.avg_ats_score),
            },
            SuccessMetric {
                label: "Interview Callback Rate",
                percent: INTERVIEW_CALLBACK_RATE_PCT,
            },
            SuccessMetric {
                label: "User Engagement",
                percent: USER_ENGAGEMENT_PCT,
            },
        ]
    }

    pub fn report(&self) -> ImpactReport {
        ImpactReport {
            active_users: self.active_users,
            weekly_growth_pct: self.weekly_growth_pct,
            cvs_generated: self.cvs_generated,
            avg_ats_score: self.avg_ats_score,
            job_applications: self.job_applications,
            interview_callbacks: self.interview_callbacks,
            whatsapp_messages: self.whatsapp_messages,
            communities: self.communities(),
            success_metrics: self.success_metrics(),
        }
    }
}
