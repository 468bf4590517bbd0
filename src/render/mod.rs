//! Output strategies that live outside the PDF engine: the portfolio page and
//! the markdown profile.

pub mod html;
pub mod markdown;

pub use html::HtmlRenderer;
pub use markdown::render_readme;
