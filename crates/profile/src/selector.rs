//! Projects a profile document onto one variant.

use crate::model::{Education, Job, Personal, ProfileDocument, Project, SkillCategory, Stat};
use crate::variant::{SectionLayout, SkillSelection, VariantSpec};

/// A job with the bullet list chosen for the variant.
#[derive(Debug, Clone)]
pub struct SelectedJob<'a> {
    pub job: &'a Job,
    pub bullets: Vec<&'a str>,
}

/// One entry of an auxiliary titled section (trading roles, quant projects).
#[derive(Debug, Clone)]
pub struct HighlightEntry<'a> {
    pub title: &'a str,
    pub meta: Vec<&'a str>,
    pub bullets: Vec<&'a str>,
}

#[derive(Debug, Clone)]
pub struct HighlightSection<'a> {
    pub heading: &'static str,
    pub entries: Vec<HighlightEntry<'a>>,
}

/// Read-only view of everything one variant renders.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    pub variant: &'static str,
    pub layout: SectionLayout,
    pub personal: Option<&'a Personal>,
    pub title: Option<&'a str>,
    pub summary: Option<&'a str>,
    pub skills: Vec<&'a SkillCategory>,
    pub highlights: Vec<HighlightSection<'a>>,
    pub jobs: Vec<SelectedJob<'a>>,
    pub education: &'a [Education],
    pub languages: Vec<(&'a str, &'a str)>,
    pub stats: &'a [Stat],
    pub projects: Vec<&'a Project>,
}

pub fn select<'a>(doc: &'a ProfileDocument, spec: &VariantSpec) -> Selection<'a> {
    let skills = match spec.skills {
        SkillSelection::AllowList(keys) => keys.iter().filter_map(|key| doc.skills.get(*key)).collect(),
        SkillSelection::All => doc.skills.values().collect(),
    };

    let jobs = doc
        .experience
        .iter()
        .take(spec.max_jobs.unwrap_or(usize::MAX))
        .map(|job| select_job(job, spec))
        .collect();

    let portfolio = spec.layout == SectionLayout::Portfolio;

    Selection {
        variant: spec.id,
        layout: spec.layout,
        personal: doc.personal.as_ref(),
        title: doc.title(spec.id),
        summary: doc.summary(spec.id),
        skills,
        highlights: if spec.quant_sections { quant_sections(doc) } else { Vec::new() },
        jobs,
        education: &doc.education,
        languages: doc
            .languages
            .iter()
            .map(|(language, level)| (language.as_str(), level.as_str()))
            .collect(),
        stats: if portfolio { &doc.stats[..] } else { &[] },
        projects: if portfolio {
            doc.projects.iter().filter(|project| project.featured).collect()
        } else {
            Vec::new()
        },
    }
}

fn select_job<'a>(job: &'a Job, spec: &VariantSpec) -> SelectedJob<'a> {
    let mut bullets = job
        .bullet_list(spec.bullet_field)
        .unwrap_or_else(|| job.bullets.iter().map(String::as_str).collect());
    if let Some(max) = spec.max_bullets {
        bullets.truncate(max);
    }
    SelectedJob { job, bullets }
}

fn quant_sections(doc: &ProfileDocument) -> Vec<HighlightSection<'_>> {
    let trading = HighlightSection {
        heading: "TRADING EXPERIENCE",
        entries: doc
            .trading_experience
            .iter()
            .map(|role| HighlightEntry {
                title: &role.title,
                meta: [role.company.as_deref(), role.period.as_deref()]
                    .into_iter()
                    .flatten()
                    .filter(|part| !part.is_empty())
                    .collect(),
                bullets: role.bullets.iter().map(String::as_str).collect(),
            })
            .collect(),
    };
    let projects = HighlightSection {
        heading: "QUANTITATIVE PROJECTS",
        entries: doc
            .quant_projects
            .iter()
            .map(|project| HighlightEntry {
                title: &project.title,
                meta: Vec::new(),
                bullets: project.bullets.iter().map(String::as_str).collect(),
            })
            .collect(),
    };
    [trading, projects]
        .into_iter()
        .filter(|section| !section.entries.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LoadedProfile;
    use crate::variant::{BACKEND, ML, PORTFOLIO, QUANT};
    use serde_json::json;

    fn profile(raw: serde_json::Value) -> LoadedProfile {
        LoadedProfile::from_value(raw).unwrap()
    }

    #[test]
    fn variant_bullets_win_over_defaults() {
        let profile = profile(json!({
            "experience": [{
                "title": "Engineer", "company": "Acme", "period": "2020-2022",
                "bullets": ["Did X"], "bullets_ml": ["Did X for ML"]
            }]
        }));

        let ml = select(profile.document(), &ML);
        assert_eq!(ml.jobs[0].bullets, ["Did X for ML"]);

        let backend = select(profile.document(), &BACKEND);
        assert_eq!(backend.jobs[0].bullets, ["Did X"]);
    }

    #[test]
    fn skills_follow_allow_list_order_and_skip_missing() {
        let profile = profile(json!({
            "skills": {
                "databases": { "label": "Databases", "items": ["PostgreSQL"] },
                "languages": { "label": "Languages", "items": ["Rust", "Python"] },
                "design": { "label": "Design", "items": ["Figma"] }
            }
        }));

        let backend = select(profile.document(), &BACKEND);
        let labels: Vec<&str> = backend.skills.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Languages", "Databases"]);

        let portfolio = select(profile.document(), &PORTFOLIO);
        let labels: Vec<&str> = portfolio.skills.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Databases", "Languages", "Design"]);
    }

    #[test]
    fn absent_title_and_summary_are_none() {
        let profile = profile(json!({ "titles": { "ml": "ML Engineer" } }));
        let backend = select(profile.document(), &BACKEND);
        assert_eq!(backend.title, None);
        assert_eq!(backend.summary, None);
        assert_eq!(select(profile.document(), &ML).title, Some("ML Engineer"));
    }

    #[test]
    fn quant_truncates_and_adds_highlights() {
        let profile = profile(json!({
            "experience": [
                { "title": "A", "company": "X", "bullets": ["1", "2", "3", "4"] },
                { "title": "B", "company": "Y", "bullets": [] },
                { "title": "C", "company": "Z", "bullets": [] }
            ],
            "trading_experience": [
                { "title": "Trader", "company": "", "period": "2021", "bullets": ["Ran books"] }
            ]
        }));

        let quant = select(profile.document(), &QUANT);
        assert_eq!(quant.jobs.len(), 2);
        assert_eq!(quant.jobs[0].bullets, ["1", "2", "3"]);
        assert_eq!(quant.highlights.len(), 1);
        assert_eq!(quant.highlights[0].heading, "TRADING EXPERIENCE");
        assert_eq!(quant.highlights[0].entries[0].meta, ["2021"]);
    }

    #[test]
    fn portfolio_keeps_only_featured_projects() {
        let profile = profile(json!({
            "projects": [
                { "title": "Shown" },
                { "title": "Hidden", "featured": false },
                { "title": "Also shown", "featured": true }
            ],
            "stats": [{ "value": 200, "suffix": "+", "label": "rps" }]
        }));

        let portfolio = select(profile.document(), &PORTFOLIO);
        let titles: Vec<&str> = portfolio.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Shown", "Also shown"]);
        assert_eq!(portfolio.stats[0].value, "200");

        let ml = select(profile.document(), &ML);
        assert!(ml.projects.is_empty());
        assert!(ml.stats.is_empty());
    }
}
