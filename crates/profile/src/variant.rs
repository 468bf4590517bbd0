//! Static per-variant configuration. None of this is derived from the data.

use crate::error::ProfileError;

/// The order in which a renderer emits sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLayout {
    /// header, summary, skills, experience, education, languages
    Resume,
    /// header, summary, stats, skills, experience, projects, education
    Portfolio,
}

/// Which skill categories a variant shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillSelection {
    AllowList(&'static [&'static str]),
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantSpec {
    pub id: &'static str,
    /// Suffix used in the default output file name.
    pub file_label: &'static str,
    pub layout: SectionLayout,
    pub skills: SkillSelection,
    /// Job field holding this variant's bullets; jobs without it use `bullets`.
    pub bullet_field: &'static str,
    pub max_jobs: Option<usize>,
    pub max_bullets: Option<usize>,
    /// Adds the trading experience and quantitative project sections.
    pub quant_sections: bool,
}

impl VariantSpec {
    const fn resume(
        id: &'static str,
        file_label: &'static str,
        skill_keys: &'static [&'static str],
        bullet_field: &'static str,
    ) -> Self {
        Self {
            id,
            file_label,
            layout: SectionLayout::Resume,
            skills: SkillSelection::AllowList(skill_keys),
            bullet_field,
            max_jobs: None,
            max_bullets: None,
            quant_sections: false,
        }
    }

    /// `Jane_Doe_Resume_ML.pdf` for a person called "Jane Doe".
    pub fn default_file_name(&self, person_name: &str) -> String {
        let stem = person_name.split_whitespace().collect::<Vec<_>>().join("_");
        if stem.is_empty() {
            format!("Resume_{}.pdf", self.file_label)
        } else {
            format!("{}_Resume_{}.pdf", stem, self.file_label)
        }
    }
}

pub const BACKEND: VariantSpec = VariantSpec::resume(
    "backend",
    "Backend",
    &["languages", "backend", "databases", "infrastructure", "monitoring", "blockchain"],
    "bullets_backend",
);

pub const ML: VariantSpec = VariantSpec::resume(
    "ml",
    "ML",
    &["languages", "ml_data", "backend", "databases", "monitoring", "infrastructure"],
    "bullets_ml",
);

pub const TECH_LEAD: VariantSpec = VariantSpec::resume(
    "techlead",
    "TechLead",
    &["languages", "leadership", "backend", "infrastructure", "databases", "monitoring"],
    "bullets_techlead",
);

pub const QUANT: VariantSpec = VariantSpec {
    max_jobs: Some(2),
    max_bullets: Some(3),
    quant_sections: true,
    ..VariantSpec::resume(
        "quant",
        "Quant",
        &["languages", "trading", "quant", "infrastructure", "databases"],
        "bullets_quant",
    )
};

pub const PORTFOLIO: VariantSpec = VariantSpec {
    id: "portfolio",
    file_label: "Portfolio",
    layout: SectionLayout::Portfolio,
    skills: SkillSelection::All,
    bullet_field: "bullets",
    max_jobs: None,
    max_bullets: None,
    quant_sections: false,
};

/// Every PDF variant, in the order `generate all` renders them.
pub const RESUME_VARIANTS: [VariantSpec; 4] = [BACKEND, ML, TECH_LEAD, QUANT];

pub fn resolve_variant(name: &str) -> Result<VariantSpec, ProfileError> {
    let wanted = name.trim().to_ascii_lowercase().replace(['-', '_'], "");
    RESUME_VARIANTS
        .iter()
        .chain(std::iter::once(&PORTFOLIO))
        .find(|spec| spec.id == wanted)
        .copied()
        .ok_or_else(|| ProfileError::UnknownVariant(name.to_string()))
}
