//! The markdown profile page.
//!
//! Values are interpolated verbatim: the document is self-authored and the
//! markdown is meant to carry whatever formatting the author put in it.

use itertools::Itertools;
use vitae_profile::{ProfileDocument, ProfileError, VariantSpec, RESUME_VARIANTS};

/// Core tech badges: label, background, logo, logo colour.
const TECH_BADGES: [(&str, &str, &str, &str); 8] = [
    ("Python", "3670A0", "python", "ffdd54"),
    ("Rust", "000000", "rust", "white"),
    ("Go", "00ADD8", "go", "white"),
    ("FastAPI", "005571", "fastapi", "white"),
    ("PostgreSQL", "316192", "postgresql", "white"),
    ("Redis", "DD0031", "redis", "white"),
    ("Docker", "0db7ed", "docker", "white"),
    ("Kubernetes", "326ce5", "kubernetes", "white"),
];

fn badge_color(spec: &VariantSpec) -> &'static str {
    match spec.id {
        "backend" => "06b6d4",
        "ml" => "10b981",
        "techlead" => "f59e0b",
        _ => "ef4444",
    }
}

/// Renders `README.md`. Needs `personal.name` and `personal.github`, since
/// every link on the page is built from the handle.
pub fn render_readme(doc: &ProfileDocument) -> Result<String, ProfileError> {
    let personal = doc.personal()?;
    let name = personal.require("name")?;
    let github = personal.require("github")?;

    let mut out = format!("## {name}\n\n");

    let headline = [
        doc.title("portfolio").map(|title| format!("**{title}**")),
        personal.location.clone(),
    ]
    .into_iter()
    .flatten()
    .join(" \u{b7} ");
    if !headline.is_empty() {
        out.push_str(&format!("{headline}\n\n"));
    }
    if let Some(summary) = doc.summary("portfolio") {
        out.push_str(&format!("{summary}\n\n"));
    }

    let badges = TECH_BADGES
        .iter()
        .map(|(label, bg, logo, fg)| {
            format!("![{label}](https://img.shields.io/badge/{label}-{bg}?style=flat-square&logo={logo}&logoColor={fg})")
        })
        .join(" ");
    out.push_str(&format!("{badges}\n\n---\n\n"));

    let featured = doc.projects.iter().filter(|project| project.featured).collect::<Vec<_>>();
    if !featured.is_empty() {
        out.push_str("### What I've Built\n\n");
        for project in featured {
            out.push_str(&format!("- **{}**: {}\n", project.title, project.description));
        }
        out.push_str("\n---\n\n");
    }

    out.push_str(&format!(
        "[![Portfolio](https://img.shields.io/badge/Portfolio-7c3aed?style=for-the-badge)](https://{}.github.io/{})\n",
        github.to_lowercase(),
        github
    ));
    for spec in &RESUME_VARIANTS {
        out.push_str(&format!(
            "[![Resume: {label}](https://img.shields.io/badge/Resume_{label}-{color}?style=for-the-badge)](https://github.com/{gh}/{gh}/blob/main/output/{file})\n",
            label = spec.file_label,
            color = badge_color(spec),
            gh = github,
            file = spec.default_file_name(name),
        ));
    }
    out.push('\n');

    let contacts = [
        personal.telegram.as_deref().map(|handle| {
            format!(
                r#"<a href="https://t.me/{handle}"><img src="https://img.shields.io/badge/Telegram-2CA5E0?style=flat-square&logo=telegram&logoColor=white" /></a>"#
            )
        }),
        personal.linkedin.as_deref().map(|handle| {
            format!(
                r#"<a href="https://linkedin.com/in/{handle}"><img src="https://img.shields.io/badge/LinkedIn-0077B5?style=flat-square&logo=linkedin&logoColor=white" /></a>"#
            )
        }),
        personal.email.as_deref().map(|email| {
            format!(
                r#"<a href="mailto:{email}"><img src="https://img.shields.io/badge/Email-D14836?style=flat-square&logo=gmail&logoColor=white" /></a>"#
            )
        }),
    ];
    let contacts = contacts.into_iter().flatten().join("\n");
    if !contacts.is_empty() {
        out.push_str(&format!("{contacts}\n\n"));
    }

    if let Some(notice) = personal.hiring_notice.as_deref().filter(|n| !n.is_empty()) {
        out.push_str(&format!("<sub>{notice}</sub>\n"));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vitae_profile::LoadedProfile;

    fn readme(value: serde_json::Value) -> Result<String, ProfileError> {
        let profile = LoadedProfile::from_value(value)?;
        render_readme(profile.document())
    }

    #[test]
    fn renders_headline_summary_and_links() {
        let text = readme(json!({
            "personal": {
                "name": "Jane Doe",
                "github": "JaneDoe",
                "location": "Berlin",
                "email": "jane@example.com",
                "hiring_notice": "Open to offers"
            },
            "titles": { "portfolio": "Backend Engineer" },
            "summaries": { "portfolio": "Builds *fast* things." }
        }))
        .unwrap();

        assert!(text.starts_with("## Jane Doe\n\n**Backend Engineer** \u{b7} Berlin\n\nBuilds *fast* things.\n"));
        assert!(text.contains("(https://janedoe.github.io/JaneDoe)"));
        assert!(text.contains("https://github.com/JaneDoe/JaneDoe/blob/main/output/Jane_Doe_Resume_ML.pdf"));
        assert!(text.contains("mailto:jane@example.com"));
        assert!(!text.contains("t.me"));
        assert!(text.ends_with("<sub>Open to offers</sub>\n"));
    }

    #[test]
    fn lists_featured_projects() {
        let text = readme(json!({
            "personal": { "name": "Jane", "github": "jane" },
            "projects": [
                { "title": "Solver", "description": "20x faster" },
                { "title": "Draft", "description": "wip", "featured": false }
            ]
        }))
        .unwrap();
        assert!(text.contains("- **Solver**: 20x faster"));
        assert!(!text.contains("Draft"));
    }

    #[test]
    fn requires_a_github_handle() {
        let result = readme(json!({ "personal": { "name": "Jane" } }));
        assert!(matches!(result, Err(ProfileError::MissingField(field)) if field == "personal.github"));
    }
}
