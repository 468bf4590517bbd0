//! Best-effort presence checks for the portfolio generator.

use crate::store::LoadedProfile;
use std::fmt;

pub const REQUIRED_TOP_LEVEL: [&str; 5] = ["personal", "meta", "skills", "experience", "education"];
pub const REQUIRED_PERSONAL: [&str; 3] = ["name", "email", "github"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    MissingField(String),
    MissingPersonal(String),
}

impl ValidationWarning {
    /// Dotted path of the missing field, e.g. `meta` or `personal.email`.
    pub fn path(&self) -> String {
        match self {
            ValidationWarning::MissingField(key) => key.clone(),
            ValidationWarning::MissingPersonal(key) => format!("personal.{}", key),
        }
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::MissingField(key) => write!(f, "Missing required field: {}", key),
            ValidationWarning::MissingPersonal(key) => write!(f, "Missing personal.{}", key),
        }
    }
}

/// Collects one warning per missing required field. Never fails.
pub fn validate(profile: &LoadedProfile) -> Vec<ValidationWarning> {
    let mut warnings: Vec<ValidationWarning> = REQUIRED_TOP_LEVEL
        .iter()
        .filter(|key| !profile.has_key(key))
        .map(|key| ValidationWarning::MissingField(key.to_string()))
        .collect();

    if let Some(personal) = profile.raw().get("personal") {
        warnings.extend(
            REQUIRED_PERSONAL
                .iter()
                .filter(|key| personal.get(**key).is_none())
                .map(|key| ValidationWarning::MissingPersonal(key.to_string())),
        );
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete() -> serde_json::Value {
        json!({
            "personal": { "name": "Jane Doe", "email": "jane@example.com", "github": "janedoe" },
            "meta": { "title": "Jane", "description": "", "keywords": "" },
            "skills": {},
            "experience": [],
            "education": []
        })
    }

    #[test]
    fn complete_document_has_no_warnings() {
        let profile = LoadedProfile::from_value(complete()).unwrap();
        assert!(validate(&profile).is_empty());
    }

    #[test]
    fn missing_email_yields_exactly_one_warning() {
        let mut raw = complete();
        raw["personal"].as_object_mut().unwrap().remove("email");
        let profile = LoadedProfile::from_value(raw).unwrap();

        let warnings = validate(&profile);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].path(), "personal.email");
        assert_eq!(warnings[0].to_string(), "Missing personal.email");
    }

    #[test]
    fn missing_personal_skips_personal_checks() {
        let mut raw = complete();
        raw.as_object_mut().unwrap().remove("personal");
        raw.as_object_mut().unwrap().remove("meta");
        let profile = LoadedProfile::from_value(raw).unwrap();

        let paths: Vec<String> = validate(&profile).iter().map(ValidationWarning::path).collect();
        assert_eq!(paths, ["personal", "meta"]);
    }
}
