//! Turns a variant selection into the block story the layout engine paginates.

use vitae_profile::{Education, HighlightSection, Personal, SelectedJob, SkillCategory};
use vitae_render_core::format::{self, Emphasized, FIELD_SEPARATOR};
use vitae_render_core::{Block, DocumentRenderer, RenderError, Run, Story};
use vitae_style::{BlockRole, Stylesheet};

pub const SUMMARY_HEADING: &str = "PROFESSIONAL SUMMARY";
pub const SKILLS_HEADING: &str = "TECHNICAL SKILLS";
pub const EXPERIENCE_HEADING: &str = "PROFESSIONAL EXPERIENCE";
pub const EDUCATION_HEADING: &str = "PROFESSIONAL DEVELOPMENT";
pub const LANGUAGES_HEADING: &str = "LANGUAGES";

pub struct StoryRenderer {
    header_gap: f32,
    story: Story,
}

impl StoryRenderer {
    pub fn new(stylesheet: &Stylesheet) -> Self {
        Self {
            header_gap: stylesheet.header_gap,
            story: Vec::new(),
        }
    }

    fn push(&mut self, role: BlockRole, text: impl Into<String>) {
        self.story.push(Block::paragraph(role, text));
    }

    fn push_emphasized(&mut self, role: BlockRole, line: Emphasized) {
        self.story.push(Block::Paragraph {
            role,
            runs: vec![Run::bold(line.lead), Run::regular(line.rest)],
        });
    }

    fn heading(&mut self, text: &str) {
        self.push(BlockRole::SectionHeader, text);
    }
}

impl DocumentRenderer for StoryRenderer {
    type Output = Story;

    fn emit_header(&mut self, personal: &Personal, title: Option<&str>) -> Result<(), RenderError> {
        if let Some(notice) = personal.hiring_notice.as_deref().filter(|n| !n.is_empty()) {
            self.push(BlockRole::Notice, notice);
        }
        self.push(BlockRole::Name, personal.display_name());
        if let Some(title) = title {
            self.push(BlockRole::Title, title);
        }
        let contact = format::contact_line(personal);
        if !contact.is_empty() {
            self.push(BlockRole::Contact, contact);
        }
        self.story.push(Block::Spacer(self.header_gap));
        self.story.push(Block::Rule);
        Ok(())
    }

    fn emit_summary(&mut self, summary: &str) -> Result<(), RenderError> {
        self.heading(SUMMARY_HEADING);
        self.push(BlockRole::Summary, summary);
        Ok(())
    }

    fn emit_skills(&mut self, skills: &[&SkillCategory]) -> Result<(), RenderError> {
        self.heading(SKILLS_HEADING);
        for category in skills {
            self.push_emphasized(BlockRole::SkillLine, format::skill_line(category));
        }
        Ok(())
    }

    fn emit_highlights(&mut self, section: &HighlightSection<'_>) -> Result<(), RenderError> {
        self.heading(section.heading);
        for entry in &section.entries {
            self.push(BlockRole::JobTitle, entry.title);
            if !entry.meta.is_empty() {
                self.push(BlockRole::Company, entry.meta.join(FIELD_SEPARATOR));
            }
            for bullet in &entry.bullets {
                self.push(BlockRole::ListItem, *bullet);
            }
        }
        Ok(())
    }

    fn emit_experience(&mut self, jobs: &[SelectedJob<'_>]) -> Result<(), RenderError> {
        self.heading(EXPERIENCE_HEADING);
        for selected in jobs {
            self.push(BlockRole::JobTitle, selected.job.title.as_str());
            self.push(BlockRole::Company, format::meta_line(selected.job));
            for bullet in &selected.bullets {
                self.push(BlockRole::ListItem, *bullet);
            }
            if let Some(tech) = format::tech_line(&selected.job.tech) {
                self.push_emphasized(BlockRole::Bullet, tech);
            }
        }
        Ok(())
    }

    fn emit_education(&mut self, education: &[Education]) -> Result<(), RenderError> {
        self.heading(EDUCATION_HEADING);
        for entry in education {
            self.push_emphasized(BlockRole::Bullet, format::education_line(entry));
        }
        Ok(())
    }

    fn emit_languages(&mut self, languages: &[(&str, &str)]) -> Result<(), RenderError> {
        self.heading(LANGUAGES_HEADING);
        self.push(BlockRole::Bullet, format::languages_line(languages));
        Ok(())
    }

    fn finish(self) -> Result<Story, RenderError> {
        Ok(self.story)
    }
}
