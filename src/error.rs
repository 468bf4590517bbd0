use thiserror::Error;
use vitae_profile::ProfileError;
use vitae_render_core::RenderError;

/// Every way a generator run can fail.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
