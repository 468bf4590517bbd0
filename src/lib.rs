//! Renders a single JSON profile into PDF résumé variants, a static portfolio
//! page with its `data.js` companion, and a markdown profile README.
//!
//! ```no_run
//! use vitae::{generate_resume, GeneratorConfig};
//! use vitae::profile::variant::ML;
//!
//! # fn main() -> Result<(), vitae::PipelineError> {
//! let config = GeneratorConfig::builder().with_env().build()?;
//! let profile = config.store().load()?;
//! generate_resume(&profile, &ML, &config.output_dir.join("resume_ml.pdf"))?;
//! # Ok(())
//! # }
//! ```

pub mod config;
mod error;
pub mod generator;
pub mod output;
pub mod render;

pub use config::{GeneratorConfig, GeneratorConfigBuilder};
pub use error::PipelineError;
pub use generator::{
    generate_all, generate_data_script, generate_portfolio, generate_readme, generate_resume, PortfolioReport,
};
pub use vitae_profile as profile;
