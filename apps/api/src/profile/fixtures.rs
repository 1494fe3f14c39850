use crate::models::profile::Profile;

/// The reference profile used across tests.
pub fn jane_doe() -> Profile {
    Profile {
        full_name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: "+27 71 000 0000".to_string(),
        location: "Kimberley".to_string(),
        skills: "Excel, Customer Service".to_string(),
        experience: "Retail Assistant, 3 years".to_string(),
        education: "Grade 12".to_string(),
        job_preferences: "Remote admin".to_string(),
        receive_job_alerts: true,
    }
}
