mod common;

use common::fixtures::*;
use common::{init_logger, load, render_resume, GeneratedPdf, TestResult};
use vitae::profile::variant::{BACKEND, ML, PORTFOLIO, QUANT, TECH_LEAD};
use vitae::profile::{select, ProfileError, RESUME_VARIANTS};
use vitae::{generate_resume, PipelineError};
use vitae_render_core::render_selection;
use vitae_render_lopdf::{StoryRenderer, EDUCATION_HEADING, EXPERIENCE_HEADING, SKILLS_HEADING, SUMMARY_HEADING};
use vitae_style::{BlockRole, Stylesheet};

fn story_texts(spec: &vitae::profile::VariantSpec, role: BlockRole) -> Vec<String> {
    let profile = load(sample_profile()).unwrap();
    let selection = select(profile.document(), spec);
    let story = render_selection(StoryRenderer::new(&Stylesheet::default()), &selection).unwrap();
    story
        .iter()
        .filter(|block| block.role() == Some(role))
        .filter_map(|block| block.plain_text())
        .collect()
}

#[test]
fn test_every_variant_renders_a_pdf_with_the_name() -> TestResult {
    init_logger();

    for spec in &RESUME_VARIANTS {
        let pdf = render_resume(sample_profile(), spec)?;
        assert_pdf_min_pages!(pdf, 1);
        assert_pdf_contains_text!(pdf, "Jane Doe");
        assert_pdf_contains_text!(pdf, "PROFESSIONAL EXPERIENCE");
        assert_pdf_has_font!(pdf, "Helvetica");
    }
    Ok(())
}

#[test]
fn test_header_summary_and_skills_come_in_order() -> TestResult {
    init_logger();

    let pdf = render_resume(sample_profile(), &BACKEND)?;
    let text = common::pdf_assertions::extract_text(&pdf.doc);
    let name = text.find("Jane Doe").ok_or("name missing")?;
    let summary = text.find("PROFESSIONAL SUMMARY").ok_or("summary missing")?;
    let skills = text.find("TECHNICAL SKILLS").ok_or("skills missing")?;
    assert!(name < summary && summary < skills, "unexpected order in:\n{text}");
    Ok(())
}

#[test]
fn test_variant_bullets_replace_the_default_list() -> TestResult {
    init_logger();

    let ml = render_resume(sample_profile(), &ML)?;
    assert_pdf_contains_text!(ml, "Did X for ML");
    assert_pdf_not_contains_text!(ml, "Ran the on-call rotation");

    let backend = render_resume(sample_profile(), &BACKEND)?;
    assert_pdf_contains_text!(backend, "Did X");
    assert_pdf_contains_text!(backend, "Ran the on-call rotation");
    assert_pdf_not_contains_text!(backend, "Did X for ML");
    Ok(())
}

#[test]
fn test_bullets_are_copied_verbatim_into_the_story() {
    assert_eq!(
        story_texts(&ML, BlockRole::ListItem),
        vec!["Did X for ML", "Built the billing service", "Wrote tests"]
    );
    assert_eq!(
        story_texts(&BACKEND, BlockRole::ListItem),
        vec!["Did X", "Ran the on-call rotation", "Built the billing service", "Wrote tests"]
    );
}

#[test]
fn test_education_line_is_identical_for_every_variant() {
    for spec in &RESUME_VARIANTS {
        let bullets = story_texts(spec, BlockRole::Bullet);
        assert!(
            bullets.contains(&"Cert A \u{2014} Org (In progress)".to_string()),
            "{} is missing the education line: {:?}",
            spec.id,
            bullets
        );
    }
}

#[test]
fn test_skill_lines_follow_the_allow_list() {
    assert_eq!(
        story_texts(&TECH_LEAD, BlockRole::SkillLine),
        vec!["Languages: Rust, Python, Go", "Leadership: Mentoring, Hiring", "Backend: FastAPI, gRPC", "Databases: PostgreSQL, Redis"]
    );
    assert_eq!(
        story_texts(&ML, BlockRole::SkillLine),
        vec!["Languages: Rust, Python, Go", "ML & Data: PyTorch, Pandas", "Backend: FastAPI, gRPC", "Databases: PostgreSQL, Redis"]
    );
}

#[test]
fn test_section_headings_keep_the_fixed_order() {
    assert_eq!(
        story_texts(&BACKEND, BlockRole::SectionHeader),
        vec![SUMMARY_HEADING, SKILLS_HEADING, EXPERIENCE_HEADING, EDUCATION_HEADING, "LANGUAGES"]
    );
}

#[test]
fn test_quant_adds_trading_sections_and_trims_experience() {
    assert_eq!(
        story_texts(&QUANT, BlockRole::SectionHeader),
        vec![
            SUMMARY_HEADING,
            SKILLS_HEADING,
            "TRADING EXPERIENCE",
            "QUANTITATIVE PROJECTS",
            EXPERIENCE_HEADING,
            EDUCATION_HEADING,
            "LANGUAGES"
        ]
    );
    assert_eq!(
        story_texts(&QUANT, BlockRole::ListItem),
        vec!["Ran a book", "Collected 260M candles", "Q1", "Q2", "Q3", "Built the billing service"]
    );
}

#[test]
fn test_missing_email_fails_before_writing() -> TestResult {
    init_logger();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("resume.pdf");
    let result = generate_resume(&load(without_personal_field("email"))?, &BACKEND, &path);

    match result {
        Err(PipelineError::Profile(ProfileError::MissingField(field))) => assert_eq!(field, "personal.email"),
        other => panic!("expected a missing field error, got {other:?}"),
    }
    assert!(!path.exists());
    Ok(())
}

#[test]
fn test_every_required_header_field_is_checked() -> TestResult {
    for field in ["name", "email", "location", "github"] {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("resume.pdf");
        let result = generate_resume(&load(without_personal_field(field))?, &ML, &path);
        assert!(result.is_err(), "{field} should be required");
        assert!(!path.exists());
    }
    Ok(())
}

#[test]
fn test_missing_title_and_summary_are_omitted() -> TestResult {
    let mut profile = sample_profile();
    profile["titles"] = serde_json::json!({});
    profile["summaries"] = serde_json::json!({});

    let pdf = render_resume(profile, &BACKEND)?;
    assert_pdf_not_contains_text!(pdf, "PROFESSIONAL SUMMARY");
    assert_pdf_not_contains_text!(pdf, "Senior Backend Engineer");
    assert_pdf_contains_text!(pdf, "TECHNICAL SKILLS");
    Ok(())
}

#[test]
fn test_long_experience_spills_onto_more_pages() -> TestResult {
    let mut profile = sample_profile();
    let bullets: Vec<String> = (0..120)
        .map(|i| format!("Delivered improvement number {i} to a production system"))
        .collect();
    profile["experience"][0]["bullets"] = serde_json::json!(bullets);

    let pdf = render_resume(profile, &BACKEND)?;
    assert_pdf_min_pages!(pdf, 2);
    assert_pdf_contains_text!(pdf, "Delivered improvement number 119");
    Ok(())
}

#[test]
fn test_missing_required_section_fails_before_writing() -> TestResult {
    init_logger();

    for section in ["skills", "experience", "education", "languages"] {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("resume.pdf");
        let result = generate_resume(&load(without_section(section))?, &BACKEND, &path);

        match result {
            Err(PipelineError::Profile(ProfileError::MissingField(field))) => assert_eq!(field, section),
            other => panic!("expected {section} to be required, got {other:?}"),
        }
        assert!(!path.exists());
    }
    Ok(())
}

#[test]
fn test_portfolio_is_not_a_resume_variant() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("resume.pdf");
    let result = generate_resume(&load(sample_profile())?, &PORTFOLIO, &path);

    assert!(matches!(result, Err(PipelineError::Config(_))), "got {result:?}");
    assert!(!path.exists());
    Ok(())
}

#[test]
fn test_reported_page_count_matches_document() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("resume.pdf");
    let pages = generate_resume(&load(sample_profile())?, &QUANT, &path)?;

    let pdf = GeneratedPdf::from_path(&path)?;
    assert_pdf_page_count!(pdf, pages);
    Ok(())
}
