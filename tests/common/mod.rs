#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use serde_json::Value;
use std::path::{Path, PathBuf};
use vitae::profile::{LoadedProfile, VariantSpec};
use vitae::{generate_resume, PipelineError};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn from_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_bytes(std::fs::read(path)?)
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn load(value: Value) -> Result<LoadedProfile, PipelineError> {
    Ok(LoadedProfile::from_value(value)?)
}

/// Writes `value` as `data.json` inside `dir` and returns its path.
pub fn write_profile(dir: &Path, value: &Value) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = dir.join("data.json");
    std::fs::write(&path, serde_json::to_string_pretty(value)?)?;
    Ok(path)
}

/// Renders one variant into a temporary directory and loads the result.
pub fn render_resume(value: Value, spec: &VariantSpec) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("resume.pdf");
    generate_resume(&load(value)?, spec, &path)?;
    GeneratedPdf::from_path(&path)
}
