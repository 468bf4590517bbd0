//! Line formatters shared by every output strategy, so a skill line or an
//! education entry reads the same in the PDF and on the portfolio page.

use itertools::Itertools;
use std::fmt;
use vitae_profile::{Education, Job, Personal, SkillCategory};

/// Delimiter between the parts of meta, contact and language lines.
pub const FIELD_SEPARATOR: &str = " | ";
pub const LIST_SEPARATOR: &str = ", ";

/// A line whose leading part is emphasized: the label of a skill line, the
/// title of an education entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emphasized {
    pub lead: String,
    pub rest: String,
}

impl fmt::Display for Emphasized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.lead, self.rest)
    }
}

/// `<label>: <item>, <item>`
pub fn skill_line(category: &SkillCategory) -> Emphasized {
    Emphasized {
        lead: format!("{}:", category.label),
        rest: format!(" {}", category.items.iter().join(LIST_SEPARATOR)),
    }
}

/// `Tech: <tech>, <tech>`, or nothing for a job without a tech list.
pub fn tech_line(tech: &[String]) -> Option<Emphasized> {
    if tech.is_empty() {
        return None;
    }
    Some(Emphasized {
        lead: "Tech:".to_string(),
        rest: format!(" {}", tech.iter().join(LIST_SEPARATOR)),
    })
}

/// `<title> — <institution> (<status>)`
pub fn education_line(entry: &Education) -> Emphasized {
    Emphasized {
        lead: entry.title.clone(),
        rest: format!(" \u{2014} {} ({})", entry.institution, entry.status),
    }
}

/// Company (with its product), period and location, skipping absent parts.
pub fn meta_line(job: &Job) -> String {
    let company = match non_empty(job.product.as_deref()) {
        Some(product) => format!("{} \u{2014} {}", job.company, product),
        None => job.company.clone(),
    };
    std::iter::once(Some(company.as_str()))
        .chain([non_empty(job.period.as_deref()), non_empty(job.location.as_deref())])
        .flatten()
        .filter(|part| !part.is_empty())
        .join(FIELD_SEPARATOR)
}

/// `Russian: Native | English: C1`
pub fn languages_line(languages: &[(&str, &str)]) -> String {
    languages
        .iter()
        .map(|(language, level)| format!("{}: {}", title_case(language), level))
        .join(FIELD_SEPARATOR)
}

/// Location, email and the profile handles expanded to their host names.
pub fn contact_line(personal: &Personal) -> String {
    let handle = |prefix: &str, value: &Option<String>| non_empty(value.as_deref()).map(|v| format!("{}{}", prefix, v));
    [
        non_empty(personal.location.as_deref()).map(str::to_string),
        non_empty(personal.email.as_deref()).map(str::to_string),
        handle("github.com/", &personal.github),
        handle("linkedin.com/in/", &personal.linkedin),
        handle("t.me/", &personal.telegram),
    ]
    .into_iter()
    .flatten()
    .join(FIELD_SEPARATOR)
}

/// Upper-cases the first character: `russian` becomes `Russian`.
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Escapes text for interpolation into HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
