use crate::error::ProfileError;
use crate::model::ProfileDocument;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Location of the profile document when nothing else is configured.
pub const DEFAULT_DATA_PATH: &str = "data.json";

/// A profile as read from storage: the raw JSON tree, kept verbatim for
/// re-serialization, and the typed document the renderers work from.
#[derive(Debug, Clone)]
pub struct LoadedProfile {
    raw: Value,
    document: ProfileDocument,
}

impl LoadedProfile {
    pub fn from_value(raw: Value) -> Result<Self, ProfileError> {
        let document = ProfileDocument::deserialize_from(&raw)?;
        Ok(Self { raw, document })
    }

    pub fn parse(source: &str) -> Result<Self, ProfileError> {
        Self::from_value(serde_json::from_str(source)?)
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn document(&self) -> &ProfileDocument {
        &self.document
    }

    /// True when the raw document carries `key` at the top level.
    pub fn has_key(&self, key: &str) -> bool {
        self.raw.get(key).is_some()
    }
}

impl ProfileDocument {
    fn deserialize_from(raw: &Value) -> Result<Self, serde_json::Error> {
        // A document whose root is not an object has nothing to select from.
        if !raw.is_object() {
            return Err(serde::de::Error::custom("profile root must be a JSON object"));
        }
        ProfileDocument::deserialize(raw)
    }
}

/// Reads profile documents from the filesystem. Every call reloads the file.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self) -> Result<LoadedProfile, ProfileError> {
        log::debug!("Loading profile from {}", self.path.display());
        let source = fs::read_to_string(&self.path).map_err(|source| ProfileError::Io {
            path: self.path.clone(),
            source,
        })?;
        LoadedProfile::parse(&source)
    }
}
