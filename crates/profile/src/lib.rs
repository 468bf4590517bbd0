//! The profile document and everything that reads it: loading, presence
//! checks and per-variant selection.

mod error;
pub mod model;
pub mod selector;
pub mod store;
pub mod validate;
pub mod variant;

pub use error::ProfileError;
pub use model::{
    Education, Job, Meta, Metric, Personal, ProfileDocument, Project, QuantProject, SkillCategory, Stat, TradingRole,
};
pub use selector::{select, HighlightEntry, HighlightSection, SelectedJob, Selection};
pub use store::{LoadedProfile, ProfileStore, DEFAULT_DATA_PATH};
pub use validate::{validate, ValidationWarning};
pub use variant::{resolve_variant, SectionLayout, SkillSelection, VariantSpec, RESUME_VARIANTS};
