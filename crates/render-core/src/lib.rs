//! Core rendering abstractions shared by the PDF and markup strategies.
//!
//! This crate provides:
//! - the `Block`/`Run` story model consumed by the PDF layout engine
//! - the `DocumentRenderer` capability set and the fixed-order driver
//! - line formatters and HTML escaping shared across strategies

mod block;
mod error;
pub mod format;
mod traits;

pub use block::{Block, Run, Story};
pub use error::RenderError;
pub use traits::{render_selection, DocumentRenderer};
