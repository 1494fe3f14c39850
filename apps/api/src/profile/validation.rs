//! Presence checks applied before a profile is saved.
//!
//! These mirror the profile form: every text field is required and the email
//! must look like an address. Nothing here inspects field content further.

use crate::errors::AppError;
use crate::models::profile::Profile;

/// Returns the camelCase names of required fields that are blank.
pub fn missing_fields(profile: &Profile) -> Vec<&'static str> {
    let fields: [(&'static str, &str); 8] = [
        ("fullName", profile.full_name.as_str()),
        ("email", profile.email.as_str()),
        ("phone", profile.phone.as_str()),
        ("location", profile.location.as_str()),
        ("skills", profile.skills.as_str()),
        ("experience", profile.experience.as_str()),
        ("education", profile.education.as_str()),
        ("jobPreferences", profile.job_preferences.as_str()),
    ];

    fields
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
}

/// One `@`, non-empty local part and domain, no whitespace.
pub fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

pub fn validate_profile(profile: &Profile) -> Result<(), AppError> {
    let missing = missing_fields(profile);
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    if !is_plausible_email(&profile.email) {
        return Err(AppError::Validation(format!(
            "'{}' is not a valid email address",
            profile.email.trim()
        )));
    }

    Ok(())
}
