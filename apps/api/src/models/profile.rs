use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current on-disk layout of [`StoredProfile`]. Bump when `Profile` changes shape.
pub const PROFILE_SCHEMA_VERSION: u32 = 1;

/// The flat record a user fills in before generating CVs.
///
/// Absent text fields read as empty so validation can name them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub job_preferences: String,
    #[serde(default = "default_receive_job_alerts")]
    pub receive_job_alerts: bool,
}

fn default_receive_job_alerts() -> bool {
    true
}

/// Envelope written under the profile key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProfile {
    pub schema_version: u32,
    pub saved_at: DateTime<Utc>,
    pub profile: Profile,
}

impl StoredProfile {
    pub fn new(profile: Profile) -> Self {
        StoredProfile {
            schema_version: PROFILE_SCHEMA_VERSION,
            saved_at: Utc::now(),
            profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_uses_camel_case_field_names() {
        let profile: Profile = serde_json::from_value(json!({
            "fullName": "Jane Doe",
            "email": "jane@example.com",
            "phone": "+27 71 000 0000",
            "location": "Kimberley",
            "skills": "Excel, Customer Service",
            "experience": "Retail Assistant, 3 years",
            "education": "Grade 12",
            "jobPreferences": "Remote admin",
            "receiveJobAlerts": false
        }))
        .unwrap();

        assert_eq!(profile.full_name, "Jane Doe");
        assert_eq!(profile.job_preferences, "Remote admin");
        assert!(!profile.receive_job_alerts);

        let value = serde_json::to_value(&profile).unwrap();
        assert!(value.get("fullName").is_some());
        assert!(value.get("full_name").is_none());
    }

    #[test]
    fn test_job_alerts_default_to_enabled() {
        let profile: Profile = serde_json::from_value(json!({
            "fullName": "Sipho",
            "email": "sipho@example.com",
            "phone": "0710000000",
            "location": "Upington",
            "skills": "Driving",
            "experience": "Courier",
            "education": "Grade 12",
            "jobPreferences": "Logistics"
        }))
        .unwrap();
        assert!(profile.receive_job_alerts);
    }

    #[test]
    fn test_absent_text_fields_read_as_empty() {
        let profile: Profile = serde_json::from_value(json!({ "email": "a@b.c" })).unwrap();
        assert_eq!(profile.email, "a@b.c");
        assert!(profile.full_name.is_empty());
        assert!(profile.job_preferences.is_empty());
    }

    #[test]
    fn test_stored_profile_is_stamped_with_current_schema() {
        let stored = StoredProfile::new(Profile {
            full_name: "A".to_string(),
            email: "a@b.c".to_string(),
            phone: "1".to_string(),
            location: "X".to_string(),
            skills: "S".to_string(),
            experience: "E".to_string(),
            education: "Ed".to_string(),
            job_preferences: "P".to_string(),
            receive_job_alerts: true,
        });
        assert_eq!(stored.schema_version, PROFILE_SCHEMA_VERSION);
        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value["schemaVersion"], 1);
    }
}
