//! Typed view of the profile document.
//!
//! Every field is lenient at the type level: an absent key deserializes to
//! `None` or an empty collection. Whether a field is required is decided by
//! the generator consuming it, see [`Personal::require`].

use crate::error::ProfileError;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileDocument {
    pub personal: Option<Personal>,
    pub meta: Option<Meta>,
    pub titles: IndexMap<String, String>,
    pub summaries: IndexMap<String, String>,
    pub skills: IndexMap<String, SkillCategory>,
    pub experience: Vec<Job>,
    pub education: Vec<Education>,
    pub languages: IndexMap<String, String>,
    pub projects: Vec<Project>,
    pub stats: Vec<Stat>,
    pub social: IndexMap<String, String>,
    pub trading_experience: Vec<TradingRole>,
    pub quant_projects: Vec<QuantProject>,
}

impl ProfileDocument {
    pub fn personal(&self) -> Result<&Personal, ProfileError> {
        self.personal
            .as_ref()
            .ok_or_else(|| ProfileError::MissingField("personal".to_string()))
    }

    pub fn title(&self, variant: &str) -> Option<&str> {
        self.titles.get(variant).map(String::as_str)
    }

    pub fn summary(&self, variant: &str) -> Option<&str> {
        self.summaries.get(variant).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Personal {
    pub name: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub telegram: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub open_to: Option<String>,
    pub tagline: Option<String>,
    pub hiring_notice: Option<String>,
}

impl Personal {
    /// Looks a field up by its document key.
    pub fn field(&self, key: &str) -> Option<&str> {
        let value = match key {
            "name" => &self.name,
            "location" => &self.location,
            "email" => &self.email,
            "phone" => &self.phone,
            "telegram" => &self.telegram,
            "github" => &self.github,
            "linkedin" => &self.linkedin,
            "open_to" => &self.open_to,
            "tagline" => &self.tagline,
            "hiring_notice" => &self.hiring_notice,
            _ => return None,
        };
        value.as_deref()
    }

    /// Fails with `personal.<key>` when the field is absent.
    pub fn require(&self, key: &str) -> Result<&str, ProfileError> {
        self.field(key)
            .ok_or_else(|| ProfileError::MissingField(format!("personal.{}", key)))
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub theme_color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub label: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub product: Option<String>,
    pub period: Option<String>,
    pub location: Option<String>,
    pub bullets: Vec<String>,
    pub tech: Vec<String>,
    /// Variant bullet lists (`bullets_ml`, `bullets_backend`, ...) and any other
    /// keys the document carries for this job.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Job {
    /// The string list stored under `field`, if the job has one.
    pub fn bullet_list(&self, field: &str) -> Option<Vec<&str>> {
        if field == "bullets" {
            return Some(self.bullets.iter().map(String::as_str).collect());
        }
        let items = self.extra.get(field)?.as_array()?;
        Some(items.iter().filter_map(Value::as_str).collect())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Education {
    pub title: String,
    pub institution: String,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub metrics: Vec<Metric>,
    pub tech: Vec<String>,
    pub featured: bool,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            metrics: Vec::new(),
            tech: Vec::new(),
            featured: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Metric {
    #[serde(deserialize_with = "display_value")]
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Stat {
    #[serde(deserialize_with = "display_value")]
    pub value: String,
    pub suffix: Option<String>,
    pub label: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TradingRole {
    pub title: String,
    pub company: Option<String>,
    pub period: Option<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuantProject {
    pub title: String,
    pub bullets: Vec<String>,
}

/// Stats and metrics are written either as strings ("99%") or bare numbers (200).
fn display_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}
