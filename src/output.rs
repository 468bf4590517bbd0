//! Plain-text artifacts: `index.html`, `README.md` and the `data.js` wrapper.

use crate::error::PipelineError;
use log::info;
use serde_json::Value;
use std::fs;
use std::path::Path;

pub const DATA_SCRIPT_FILE: &str = "data.js";
pub const DATA_SCRIPT_HEADER: &str = "// Auto-generated from data.json \u{2014} do not edit directly\n";

/// Writes UTF-8 `contents` to `path`, creating missing parent directories.
pub fn write_text(path: &Path, contents: &str) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    info!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

/// Re-serializes the whole document as a script assigning `window.PORTFOLIO_DATA`.
///
/// Keys keep their input order and non-ASCII text is written as-is, so the
/// same document always yields the same bytes.
pub fn data_script(raw: &Value) -> Result<String, PipelineError> {
    let json = serde_json::to_string_pretty(raw)?;
    Ok(format!("{DATA_SCRIPT_HEADER}window.PORTFOLIO_DATA = {json};\n"))
}
