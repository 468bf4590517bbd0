pub mod dimension;
pub mod font;
pub mod stylesheet;
pub mod text;

pub use dimension::{Margins, PageLayout, PageSize};
pub use font::{BuiltinFont, FontWeight};
pub use stylesheet::{BlockRole, ParagraphStyle, RuleStyle, Stylesheet};
pub use text::TextAlign;
