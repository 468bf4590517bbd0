//! PDF output for resume variants, built on lopdf.
//!
//! A selection becomes a flat block story ([`StoryRenderer`]), the story is
//! paginated onto A4 pages ([`LayoutEngine`]), and the pages are written with
//! unembedded Helvetica fonts ([`PdfRenderer`]).

mod layout;
pub mod metrics;
mod renderer;
mod story;
mod writer;

pub use layout::{LaidOutPage, LayoutEngine, PositionedElement, TextSegment};
pub use renderer::PdfRenderer;
pub use story::{StoryRenderer, EDUCATION_HEADING, EXPERIENCE_HEADING, LANGUAGES_HEADING, SKILLS_HEADING, SUMMARY_HEADING};
pub use writer::PdfWriter;
