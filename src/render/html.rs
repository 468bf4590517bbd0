//! The portfolio page strategy.
//!
//! Fragments are collected per section while the driver emits, then wrapped in
//! a self-contained page with inline CSS. Every interpolated value is escaped.

use indexmap::IndexMap;
use itertools::Itertools;
use log::warn;
use vitae_profile::{
    Education, Meta, Personal, ProfileDocument, Project, SelectedJob, SkillCategory, Stat,
    RESUME_VARIANTS,
};
use vitae_render_core::format::{self, escape_html as esc, Emphasized};
use vitae_render_core::{DocumentRenderer, RenderError};
use vitae_types::Color;

const DEFAULT_THEME_COLOR: &str = "#7c3aed";

const STYLES: &str = r#"
:root {
    --bg: #0a0a0f;
    --surface: #12121a;
    --border: #1f1f2e;
    --text: #e4e4e7;
    --text-secondary: #a1a1aa;
    --accent: #7c3aed;
    --accent-2: #06b6d4;
}
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: 'JetBrains Mono', ui-monospace, monospace; background: var(--bg); color: var(--text); line-height: 1.6; }
a { color: var(--accent-2); text-decoration: none; }
nav { position: sticky; top: 0; display: flex; justify-content: space-between; align-items: center; padding: 1rem 2rem; background: rgba(10, 10, 15, 0.9); border-bottom: 1px solid var(--border); }
.nav-logo { font-weight: 700; color: var(--accent); }
.nav-links a { margin: 0 0.75rem; color: var(--text-secondary); }
.nav-cta { padding: 0.4rem 1rem; border: 1px solid var(--accent); border-radius: 6px; }
.hero { max-width: 960px; margin: 0 auto; padding: 6rem 2rem 4rem; }
.hero-badge { display: inline-flex; gap: 0.5rem; align-items: center; padding: 0.3rem 0.8rem; border: 1px solid var(--border); border-radius: 999px; font-size: 0.8rem; color: var(--text-secondary); }
.hero-badge .dot { width: 8px; height: 8px; border-radius: 50%; background: #10b981; }
.hero h1 { font-size: 3.5rem; line-height: 1.1; margin: 1.5rem 0 1rem; }
.gradient { background: linear-gradient(90deg, var(--accent), var(--accent-2)); -webkit-background-clip: text; background-clip: text; color: transparent; }
.hero-subtitle { color: var(--accent-2); font-size: 1.2rem; }
.hero-description { color: var(--text-secondary); margin: 1rem 0; max-width: 640px; }
.hero-contact { display: flex; flex-wrap: wrap; gap: 1.5rem; font-size: 0.9rem; color: var(--text-secondary); }
.hero-buttons, .resume-buttons, .social-links { display: flex; flex-wrap: wrap; gap: 1rem; margin-top: 1.5rem; }
.btn-primary, .btn-secondary, .resume-btn, .social-link { padding: 0.6rem 1.2rem; border-radius: 8px; border: 1px solid var(--border); color: var(--text); }
.btn-primary { background: var(--accent); border-color: var(--accent); }
.resume-label { margin-top: 2rem; color: var(--text-secondary); }
section { max-width: 960px; margin: 0 auto; padding: 4rem 2rem; }
.section-header { text-align: center; margin-bottom: 2.5rem; }
.section-tag { color: var(--accent); font-size: 0.85rem; }
.section-title { font-size: 2rem; margin-top: 0.5rem; }
.section-lead { color: var(--text-secondary); max-width: 600px; margin: 1rem auto 0; }
.stats-grid, .skills-grid, .projects-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1.25rem; }
.stat, .skill-category, .project-card, .experience-item, .education-item { background: var(--surface); border: 1px solid var(--border); border-radius: 10px; padding: 1.25rem; }
.stat { text-align: center; }
.stat-value { display: block; font-size: 2rem; font-weight: 700; color: var(--accent-2); }
.stat-label, .metric-label, .company { color: var(--text-secondary); font-size: 0.85rem; }
.skill-tags, .tech-tags, .metrics { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 0.75rem; }
.skill-tag, .tech-tag { padding: 0.2rem 0.6rem; border-radius: 6px; background: var(--border); font-size: 0.8rem; }
.metric { display: flex; flex-direction: column; }
.metric-value { font-weight: 700; color: var(--accent); }
.experience-item, .education-item { margin-bottom: 1.25rem; }
.experience-item ul { margin: 0.75rem 0 0.75rem 1.25rem; }
.tech { font-size: 0.85rem; color: var(--text-secondary); }
.contact-section { text-align: center; }
.contact-section .social-links { justify-content: center; }
footer { text-align: center; padding: 2rem; color: var(--text-secondary); border-top: 1px solid var(--border); font-size: 0.85rem; }
"#;

struct Section {
    id: String,
    nav_label: String,
    heading: String,
    lead: Option<String>,
    body: String,
}

/// Renders the portfolio layout of a selection into a complete HTML page.
pub struct HtmlRenderer<'a> {
    meta: Option<&'a Meta>,
    social: &'a IndexMap<String, String>,
    name: String,
    hero: String,
    sections: Vec<Section>,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(doc: &'a ProfileDocument) -> Self {
        Self {
            meta: doc.meta.as_ref(),
            social: &doc.social,
            name: String::new(),
            hero: String::new(),
            sections: Vec::new(),
        }
    }

    fn section(&mut self, id: &str, nav_label: &str, first: &str, accent: &str) -> &mut Section {
        self.sections.push(Section {
            id: id.to_string(),
            nav_label: nav_label.to_string(),
            heading: format!(r#"{first} <span class="gradient">{accent}</span>"#),
            lead: None,
            body: String::new(),
        });
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    fn head(&self, fallback_title: &str) -> String {
        let (title, description, keywords, theme) = match self.meta {
            Some(meta) => (
                if meta.title.is_empty() { fallback_title } else { meta.title.as_str() },
                meta.description.as_str(),
                meta.keywords.as_str(),
                meta.theme_color.as_deref().unwrap_or(DEFAULT_THEME_COLOR),
            ),
            None => (fallback_title, "", "", DEFAULT_THEME_COLOR),
        };
        let theme = theme_color(theme);
        let mut head = String::from("<head>\n");
        head.push_str("    <meta charset=\"UTF-8\">\n");
        head.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        head.push_str(&format!("    <title>{}</title>\n", esc(title)));
        head.push_str(&format!("    <meta name=\"description\" content=\"{}\">\n", esc(description)));
        head.push_str(&format!("    <meta name=\"keywords\" content=\"{}\">\n", esc(keywords)));
        head.push_str(&format!("    <meta name=\"theme-color\" content=\"{}\">\n", theme));
        head.push_str(&format!("    <meta property=\"og:title\" content=\"{}\">\n", esc(title)));
        head.push_str(&format!("    <meta property=\"og:description\" content=\"{}\">\n", esc(description)));
        head.push_str("    <meta property=\"og:type\" content=\"website\">\n");
        head.push_str(&format!("    <style>{STYLES}</style>\n"));
        head.push_str("</head>\n");
        head
    }

    fn nav(&self) -> String {
        let links = self
            .sections
            .iter()
            .map(|section| format!(r##"<a href="#{}">{}</a>"##, section.id, esc(&section.nav_label)))
            .join("\n            ");
        format!(
            r##"    <nav>
        <div class="nav-logo">{}</div>
        <div class="nav-links">
            {}
        </div>
        <a href="#contact" class="nav-cta">Contact</a>
    </nav>
"##,
            esc(&initials(&self.name)),
            links
        )
    }

    fn contact_section(&self) -> String {
        let links = self
            .social
            .iter()
            .filter(|(_, url)| !url.is_empty())
            .map(|(platform, url)| {
                let target = if url.starts_with("mailto:") {
                    ""
                } else {
                    r#" target="_blank" rel="noopener""#
                };
                format!(
                    r#"<a href="{}" class="social-link"{}>{}</a>"#,
                    esc(url),
                    target,
                    esc(&platform_label(platform))
                )
            })
            .join("\n            ");
        format!(
            r#"    <section id="contact" class="contact-section">
        <div class="section-header">
            <span class="section-tag">&lt;contact /&gt;</span>
            <h2 class="section-title">Let's <span class="gradient">Connect</span></h2>
        </div>
        <div class="social-links">
            {links}
        </div>
    </section>
"#
        )
    }
}

/// Normalizes a CSS hex color, falling back to the default for anything unparsable.
fn theme_color(value: &str) -> String {
    match Color::from_hex(value) {
        Ok(color) => color.to_hex(),
        Err(e) => {
            warn!("Ignoring theme color '{}': {}", value, e);
            DEFAULT_THEME_COLOR.to_string()
        }
    }
}

fn platform_label(platform: &str) -> String {
    match platform {
        "github" => "GitHub".to_string(),
        "linkedin" => "LinkedIn".to_string(),
        other => format::title_case(other),
    }
}

fn emphasized_html(line: &Emphasized) -> String {
    format!("<strong>{}</strong>{}", esc(&line.lead), esc(&line.rest))
}

fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|word| word.chars().next()).collect()
}

impl DocumentRenderer for HtmlRenderer<'_> {
    type Output = String;

    fn emit_header(&mut self, personal: &Personal, title: Option<&str>) -> Result<(), RenderError> {
        let name = personal.display_name();
        self.name = name.to_string();
        let mut words = name.split_whitespace();
        let first = words.next().unwrap_or_default();
        let last = words.last().unwrap_or_default();

        let mut hero = String::from("    <header class=\"hero\">\n");
        if let Some(notice) = personal.hiring_notice.as_deref().filter(|n| !n.is_empty()) {
            hero.push_str(&format!(
                "        <div class=\"hero-badge\"><span class=\"dot\"></span>{}</div>\n",
                esc(notice)
            ));
        }
        hero.push_str(&format!(
            "        <h1>{}<br><span class=\"gradient\">{}</span></h1>\n",
            esc(first),
            esc(last)
        ));
        if let Some(title) = title {
            hero.push_str(&format!("        <p class=\"hero-subtitle\">&gt; {}</p>\n", esc(title)));
        }
        if let Some(tagline) = personal.tagline.as_deref() {
            hero.push_str(&format!("        <p class=\"hero-description\">{}</p>\n", esc(tagline)));
        }

        let mut contact = Vec::new();
        if let Some(location) = personal.location.as_deref() {
            match personal.open_to.as_deref() {
                Some(open_to) => contact.push(format!("<span>{} ({})</span>", esc(location), esc(open_to))),
                None => contact.push(format!("<span>{}</span>", esc(location))),
            }
        }
        if let Some(email) = personal.email.as_deref() {
            contact.push(format!(
                r#"<span><a href="mailto:{0}">{0}</a></span>"#,
                esc(email)
            ));
        }
        if let Some(github) = personal.github.as_deref() {
            contact.push(format!(
                r#"<span><a href="https://github.com/{0}" target="_blank" rel="noopener">github.com/{0}</a></span>"#,
                esc(github)
            ));
        }
        if !contact.is_empty() {
            hero.push_str(&format!(
                "        <div class=\"hero-contact\">\n            {}\n        </div>\n",
                contact.join("\n            ")
            ));
        }

        hero.push_str("        <div class=\"hero-buttons\">\n");
        hero.push_str("            <a href=\"#contact\" class=\"btn-primary\">Get in Touch</a>\n");
        if let Some(github) = personal.github.as_deref() {
            hero.push_str(&format!(
                "            <a href=\"https://github.com/{}\" class=\"btn-secondary\" target=\"_blank\" rel=\"noopener\">View GitHub</a>\n",
                esc(github)
            ));
        }
        hero.push_str("        </div>\n");

        if let Some(github) = personal.github.as_deref() {
            let buttons = RESUME_VARIANTS
                .iter()
                .map(|spec| {
                    format!(
                        r#"<a href="https://github.com/{gh}/{gh}/raw/main/output/{file}" class="resume-btn" target="_blank">{label}</a>"#,
                        gh = esc(github),
                        file = esc(&spec.default_file_name(name)),
                        label = esc(spec.file_label)
                    )
                })
                .join("\n                ");
            hero.push_str(&format!(
                "        <div class=\"resume-downloads\">\n            <p class=\"resume-label\">Download Resume:</p>\n            <div class=\"resume-buttons\">\n                {buttons}\n            </div>\n        </div>\n"
            ));
        }
        hero.push_str("    </header>\n");
        self.hero = hero;
        Ok(())
    }

    fn emit_summary(&mut self, summary: &str) -> Result<(), RenderError> {
        let section = self.section("about", "About", "Building", "High-Performance Systems");
        section.lead = Some(esc(summary));
        Ok(())
    }

    fn emit_stats(&mut self, stats: &[Stat]) -> Result<(), RenderError> {
        let cards = stats
            .iter()
            .map(|stat| {
                format!(
                    "<div class=\"stat\"><span class=\"stat-value\">{}{}</span><span class=\"stat-label\">{}</span></div>",
                    esc(&stat.value),
                    esc(stat.suffix.as_deref().unwrap_or_default()),
                    esc(&stat.label)
                )
            })
            .join("\n            ");
        let grid = format!("        <div class=\"stats-grid\">\n            {cards}\n        </div>\n");
        match self.sections.iter().position(|section| section.id == "about") {
            Some(index) => self.sections[index].body.push_str(&grid),
            None => self.section("about", "About", "At a", "Glance").body = grid,
        }
        Ok(())
    }

    fn emit_skills(&mut self, skills: &[&SkillCategory]) -> Result<(), RenderError> {
        let categories = skills
            .iter()
            .map(|category| {
                let tags = category
                    .items
                    .iter()
                    .map(|item| format!("<span class=\"skill-tag\">{}</span>", esc(item)))
                    .join("");
                format!(
                    "<div class=\"skill-category\"><h4>{}</h4><div class=\"skill-tags\">{}</div></div>",
                    esc(&category.label),
                    tags
                )
            })
            .join("\n            ");
        let section = self.section("skills", "Skills", "Technical", "Expertise");
        section.body = format!("        <div class=\"skills-grid\">\n            {categories}\n        </div>\n");
        Ok(())
    }

    fn emit_experience(&mut self, jobs: &[SelectedJob<'_>]) -> Result<(), RenderError> {
        let items = jobs
            .iter()
            .map(|selected| {
                let bullets = selected.bullets.iter().map(|b| format!("<li>{}</li>", esc(b))).join("");
                let tech = format::tech_line(&selected.job.tech)
                    .map(|line| format!("<p class=\"tech\">{}</p>", emphasized_html(&line)))
                    .unwrap_or_default();
                format!(
                    "<div class=\"experience-item\"><h4>{}</h4><p class=\"company\">{}</p><ul>{}</ul>{}</div>",
                    esc(&selected.job.title),
                    esc(&format::meta_line(selected.job)),
                    bullets,
                    tech
                )
            })
            .join("\n        ");
        let section = self.section("experience", "Experience", "Work", "Experience");
        section.body = format!("        {items}\n");
        Ok(())
    }

    fn emit_projects(&mut self, projects: &[&Project]) -> Result<(), RenderError> {
        let cards = projects
            .iter()
            .map(|project| {
                let metrics = project
                    .metrics
                    .iter()
                    .map(|metric| {
                        format!(
                            "<div class=\"metric\"><span class=\"metric-value\">{}</span><span class=\"metric-label\">{}</span></div>",
                            esc(&metric.value),
                            esc(&metric.label)
                        )
                    })
                    .join("");
                let tech = project
                    .tech
                    .iter()
                    .map(|t| format!("<span class=\"tech-tag\">{}</span>", esc(t)))
                    .join("");
                format!(
                    "<div class=\"project-card\"><h4>{}</h4><p>{}</p><div class=\"metrics\">{}</div><div class=\"tech-tags\">{}</div></div>",
                    esc(&project.title),
                    esc(&project.description),
                    metrics,
                    tech
                )
            })
            .join("\n            ");
        let section = self.section("projects", "Projects", "Featured", "Projects");
        section.body = format!("        <div class=\"projects-grid\">\n            {cards}\n        </div>\n");
        Ok(())
    }

    fn emit_education(&mut self, education: &[Education]) -> Result<(), RenderError> {
        let items = education
            .iter()
            .map(|entry| {
                format!(
                    "<div class=\"education-item\"><p>{}</p></div>",
                    emphasized_html(&format::education_line(entry))
                )
            })
            .join("\n        ");
        let section = self.section("education", "Education", "Continuous", "Learning");
        section.body = format!("        {items}\n");
        Ok(())
    }

    fn emit_languages(&mut self, languages: &[(&str, &str)]) -> Result<(), RenderError> {
        let line = format::languages_line(languages);
        let section = self.section("languages", "Languages", "Spoken", "Languages");
        section.body = format!("        <p class=\"section-lead\">{}</p>\n", esc(&line));
        Ok(())
    }

    fn finish(self) -> Result<String, RenderError> {
        let fallback_title = if self.name.is_empty() { "Portfolio" } else { self.name.as_str() };
        let mut page = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n");
        page.push_str(&self.head(fallback_title));
        page.push_str("<body>\n");
        page.push_str(&self.nav());
        page.push_str(&self.hero);
        for section in &self.sections {
            page.push_str(&format!("    <section id=\"{}\">\n", section.id));
            page.push_str("        <div class=\"section-header\">\n");
            page.push_str(&format!(
                "            <span class=\"section-tag\">&lt;{} /&gt;</span>\n",
                section.id
            ));
            page.push_str(&format!("            <h2 class=\"section-title\">{}</h2>\n", section.heading));
            if let Some(lead) = &section.lead {
                page.push_str(&format!("            <p class=\"section-lead\">{lead}</p>\n"));
            }
            page.push_str("        </div>\n");
            page.push_str(&section.body);
            page.push_str("    </section>\n");
        }
        page.push_str(&self.contact_section());
        page.push_str("    <footer>\n        <p>Generated from data.json</p>\n    </footer>\n");
        page.push_str("</body>\n</html>\n");
        Ok(page)
    }
}
