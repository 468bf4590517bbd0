//! Where generators read the profile from and where they write.

use crate::error::PipelineError;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use vitae_profile::{ProfileStore, VariantSpec, DEFAULT_DATA_PATH};

/// Environment variable consulted for the profile path when no flag is given.
pub const DATA_ENV_VAR: &str = "VITAE_DATA";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const PORTFOLIO_DIR: &str = "portfolio";
pub const README_FILE: &str = "README.md";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub data_path: PathBuf,
    pub output_dir: PathBuf,
}

impl GeneratorConfig {
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    pub fn store(&self) -> ProfileStore {
        ProfileStore::new(&self.data_path)
    }

    pub fn resume_path(&self, spec: &VariantSpec, person_name: &str) -> PathBuf {
        self.output_dir.join(spec.default_file_name(person_name))
    }

    pub fn portfolio_dir(&self) -> PathBuf {
        self.output_dir.join(PORTFOLIO_DIR)
    }

    pub fn readme_path(&self) -> PathBuf {
        self.output_dir.join(README_FILE)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Explicit values win over `VITAE_DATA`, which wins over the defaults.
#[derive(Debug, Default, Clone)]
pub struct GeneratorConfigBuilder {
    data_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

impl GeneratorConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.data_path = Some(path.into());
        self
    }

    pub fn with_output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Takes the data path from `VITAE_DATA` unless one was already set.
    pub fn with_env(self) -> Self {
        self.with_data_path_fallback(env::var_os(DATA_ENV_VAR))
    }

    fn with_data_path_fallback(mut self, value: Option<OsString>) -> Self {
        if self.data_path.is_none() {
            self.data_path = value.filter(|v| !v.is_empty()).map(PathBuf::from);
        }
        self
    }

    pub fn build(self) -> Result<GeneratorConfig, PipelineError> {
        let defaults = GeneratorConfig::default();
        let data_path = self.data_path.unwrap_or(defaults.data_path);
        let output_dir = self.output_dir.unwrap_or(defaults.output_dir);
        if data_path.as_os_str().is_empty() {
            return Err(PipelineError::Config("data path must not be empty".into()));
        }
        Ok(GeneratorConfig { data_path, output_dir })
    }
}
