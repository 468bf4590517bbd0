//! One entry point per artifact. Each takes an already loaded profile, so the
//! caller decides where the document comes from.

use crate::config::GeneratorConfig;
use crate::error::PipelineError;
use crate::output::{data_script, write_text, DATA_SCRIPT_FILE};
use crate::render::{render_readme, HtmlRenderer};
use log::{info, warn};
use std::path::{Path, PathBuf};
use vitae_profile::variant::PORTFOLIO;
use vitae_profile::{
    select, validate, LoadedProfile, ProfileError, SectionLayout, ValidationWarning, VariantSpec, RESUME_VARIANTS,
};
use vitae_render_core::render_selection;
use vitae_render_lopdf::{PdfRenderer, StoryRenderer};
use vitae_style::Stylesheet;

/// Personal fields a résumé header cannot be built without.
pub const RESUME_REQUIRED_FIELDS: [&str; 4] = ["name", "email", "location", "github"];

/// Top-level sections every résumé variant reads unconditionally.
pub const RESUME_REQUIRED_SECTIONS: [&str; 4] = ["skills", "experience", "education", "languages"];

pub const INDEX_FILE: &str = "index.html";

/// What `generate_portfolio` wrote and what it found missing along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioReport {
    pub index_path: PathBuf,
    pub data_script_path: PathBuf,
    pub warnings: Vec<ValidationWarning>,
}

/// Renders one résumé variant to `path` and returns its page count.
///
/// Required personal fields and sections are checked before anything is
/// rendered, so a failure never leaves a file behind.
pub fn generate_resume(profile: &LoadedProfile, spec: &VariantSpec, path: &Path) -> Result<usize, PipelineError> {
    if spec.layout != SectionLayout::Resume {
        return Err(PipelineError::Config(format!(
            "'{}' is not a resume variant",
            spec.id
        )));
    }

    let doc = profile.document();
    let personal = doc.personal()?;
    for field in RESUME_REQUIRED_FIELDS {
        personal.require(field)?;
    }
    if let Some(section) = RESUME_REQUIRED_SECTIONS.iter().find(|key| !profile.has_key(key)) {
        return Err(ProfileError::MissingField((*section).to_string()).into());
    }

    let stylesheet = Stylesheet::default();
    let selection = select(doc, spec);
    let story = render_selection(StoryRenderer::new(&stylesheet), &selection)?;
    let title = format!("{} - Resume ({})", personal.display_name(), spec.file_label);

    let pages = PdfRenderer::new(stylesheet).render_to_path(&story, Some(&title), path)?;
    info!("Generated {} resume: {} ({} page(s))", spec.id, path.display(), pages);
    Ok(pages)
}

/// Writes `index.html` and `data.js` into `dir`.
///
/// Presence problems are logged and returned but never stop the page from
/// being written.
pub fn generate_portfolio(profile: &LoadedProfile, dir: &Path) -> Result<PortfolioReport, PipelineError> {
    let warnings = validate(profile);
    for warning in &warnings {
        warn!("Validation warning: {}", warning);
    }

    let doc = profile.document();
    let html = render_selection(HtmlRenderer::new(doc), &select(doc, &PORTFOLIO))?;
    let index_path = dir.join(INDEX_FILE);
    write_text(&index_path, &html)?;

    let data_script_path = generate_data_script(profile, dir)?;
    info!("Generated portfolio in {}", dir.display());
    Ok(PortfolioReport {
        index_path,
        data_script_path,
        warnings,
    })
}

pub fn generate_data_script(profile: &LoadedProfile, dir: &Path) -> Result<PathBuf, PipelineError> {
    let path = dir.join(DATA_SCRIPT_FILE);
    write_text(&path, &data_script(profile.raw())?)?;
    Ok(path)
}

pub fn generate_readme(profile: &LoadedProfile, path: &Path) -> Result<(), PipelineError> {
    let markdown = render_readme(profile.document())?;
    write_text(path, &markdown)?;
    info!("Generated README: {}", path.display());
    Ok(())
}

/// Every résumé variant, then the portfolio, then the README. The document is
/// reloaded for each generator and the first failure stops the run.
pub fn generate_all(config: &GeneratorConfig) -> Result<Vec<PathBuf>, PipelineError> {
    let store = config.store();
    let mut written = Vec::new();

    for spec in &RESUME_VARIANTS {
        let profile = store.load()?;
        let name = profile.document().personal()?.display_name().to_string();
        let path = config.resume_path(spec, &name);
        generate_resume(&profile, spec, &path)?;
        written.push(path);
    }

    let report = generate_portfolio(&store.load()?, &config.portfolio_dir())?;
    written.push(report.index_path);
    written.push(report.data_script_path);

    let readme_path = config.readme_path();
    generate_readme(&store.load()?, &readme_path)?;
    written.push(readme_path);

    info!("Generated {} files in {}", written.len(), config.output_dir.display());
    Ok(written)
}
