use crate::error::RenderError;
use vitae_profile::{Education, HighlightSection, Personal, Project, SectionLayout, SelectedJob, Selection, SkillCategory, Stat};

/// The capability set every output strategy implements.
///
/// A renderer is driven by [`render_selection`], which decides the order of
/// sections and skips those without data; implementations only emit.
pub trait DocumentRenderer {
    type Output;

    fn emit_header(&mut self, personal: &Personal, title: Option<&str>) -> Result<(), RenderError>;

    fn emit_summary(&mut self, summary: &str) -> Result<(), RenderError>;

    fn emit_skills(&mut self, skills: &[&SkillCategory]) -> Result<(), RenderError>;

    fn emit_experience(&mut self, jobs: &[SelectedJob<'_>]) -> Result<(), RenderError>;

    fn emit_education(&mut self, education: &[Education]) -> Result<(), RenderError>;

    fn emit_languages(&mut self, languages: &[(&str, &str)]) -> Result<(), RenderError>;

    fn emit_highlights(&mut self, _section: &HighlightSection<'_>) -> Result<(), RenderError> {
        Ok(())
    }

    fn emit_stats(&mut self, _stats: &[Stat]) -> Result<(), RenderError> {
        Ok(())
    }

    fn emit_projects(&mut self, _projects: &[&Project]) -> Result<(), RenderError> {
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, RenderError>;
}

/// Emits `selection` in the fixed section order for its layout.
pub fn render_selection<R: DocumentRenderer>(mut renderer: R, selection: &Selection<'_>) -> Result<R::Output, RenderError> {
    let fallback = Personal::default();
    renderer.emit_header(selection.personal.unwrap_or(&fallback), selection.title)?;
    if let Some(summary) = selection.summary {
        renderer.emit_summary(summary)?;
    }

    match selection.layout {
        SectionLayout::Resume => {
            if !selection.skills.is_empty() {
                renderer.emit_skills(&selection.skills)?;
            }
            for section in &selection.highlights {
                renderer.emit_highlights(section)?;
            }
            if !selection.jobs.is_empty() {
                renderer.emit_experience(&selection.jobs)?;
            }
            if !selection.education.is_empty() {
                renderer.emit_education(selection.education)?;
            }
            if !selection.languages.is_empty() {
                renderer.emit_languages(&selection.languages)?;
            }
        }
        SectionLayout::Portfolio => {
            if !selection.stats.is_empty() {
                renderer.emit_stats(selection.stats)?;
            }
            if !selection.skills.is_empty() {
                renderer.emit_skills(&selection.skills)?;
            }
            if !selection.jobs.is_empty() {
                renderer.emit_experience(&selection.jobs)?;
            }
            if !selection.projects.is_empty() {
                renderer.emit_projects(&selection.projects)?;
            }
            if !selection.education.is_empty() {
                renderer.emit_education(selection.education)?;
            }
        }
    }

    renderer.finish()
}
