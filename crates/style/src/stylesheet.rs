//! The single style table shared by every resume variant.
//!
//! Styles are keyed by the role a block plays in the document, never by the
//! variant being rendered. Variants differ only in the content they select.

use crate::dimension::{inches, Margins, PageLayout, PageSize};
use crate::font::FontWeight;
use crate::text::TextAlign;
use vitae_types::Color;

pub const PRIMARY: Color = Color::rgb(0x1a, 0x1a, 0x2e);
pub const ACCENT: Color = Color::rgb(0x4a, 0x90, 0xd9);
pub const TEXT: Color = Color::gray(0x33);
pub const GREY: Color = Color::gray(0x66);

/// The part a paragraph plays in the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockRole {
    Notice,
    Name,
    Title,
    Contact,
    SectionHeader,
    JobTitle,
    Company,
    Bullet,
    /// A bullet paragraph the layout engine prefixes with a list marker.
    ListItem,
    Summary,
    SkillLine,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    pub font_size: f32,
    /// Distance between consecutive baselines.
    pub leading: f32,
    pub font_weight: FontWeight,
    pub color: Color,
    pub text_align: TextAlign,
    pub space_before: f32,
    pub space_after: f32,
    pub left_indent: f32,
}

impl ParagraphStyle {
    const fn body(font_size: f32, leading: f32, color: Color) -> Self {
        Self {
            font_size,
            leading,
            font_weight: FontWeight::Regular,
            color,
            text_align: TextAlign::Left,
            space_before: 0.0,
            space_after: 0.0,
            left_indent: 0.0,
        }
    }

    const fn bold(mut self) -> Self {
        self.font_weight = FontWeight::Bold;
        self
    }

    const fn align(mut self, text_align: TextAlign) -> Self {
        self.text_align = text_align;
        self
    }

    const fn spacing(mut self, before: f32, after: f32) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    const fn indent(mut self, left_indent: f32) -> Self {
        self.left_indent = left_indent;
        self
    }
}

/// A horizontal divider spanning the content width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleStyle {
    pub thickness: f32,
    pub color: Color,
    pub space_before: f32,
    pub space_after: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    pub page: PageLayout,
    pub rule: RuleStyle,
    /// Gap inserted between the contact line and the header rule.
    pub header_gap: f32,
    pub notice: ParagraphStyle,
    pub name: ParagraphStyle,
    pub title: ParagraphStyle,
    pub contact: ParagraphStyle,
    pub section_header: ParagraphStyle,
    pub job_title: ParagraphStyle,
    pub company: ParagraphStyle,
    pub bullet: ParagraphStyle,
    pub summary: ParagraphStyle,
    pub skill_line: ParagraphStyle,
}

impl Stylesheet {
    pub fn style(&self, role: BlockRole) -> &ParagraphStyle {
        match role {
            BlockRole::Notice => &self.notice,
            BlockRole::Name => &self.name,
            BlockRole::Title => &self.title,
            BlockRole::Contact => &self.contact,
            BlockRole::SectionHeader => &self.section_header,
            BlockRole::JobTitle => &self.job_title,
            BlockRole::Company => &self.company,
            BlockRole::Bullet | BlockRole::ListItem => &self.bullet,
            BlockRole::Summary => &self.summary,
            BlockRole::SkillLine => &self.skill_line,
        }
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            page: PageLayout {
                size: PageSize::A4,
                margins: Margins::symmetric(inches(0.45), inches(0.55)),
            },
            rule: RuleStyle {
                thickness: 0.75,
                color: ACCENT,
                space_before: 0.0,
                space_after: 6.0,
            },
            header_gap: 6.0,
            notice: ParagraphStyle::body(8.0, 10.0, ACCENT)
                .align(TextAlign::Center)
                .spacing(0.0, 6.0),
            name: ParagraphStyle::body(20.0, 24.0, PRIMARY).bold().spacing(0.0, 2.0),
            title: ParagraphStyle::body(11.0, 13.0, ACCENT).bold().spacing(0.0, 6.0),
            contact: ParagraphStyle::body(8.5, 11.0, GREY).spacing(0.0, 2.0),
            section_header: ParagraphStyle::body(10.5, 13.0, PRIMARY).bold().spacing(10.0, 5.0),
            job_title: ParagraphStyle::body(10.0, 12.0, PRIMARY).bold().spacing(7.0, 1.0),
            company: ParagraphStyle::body(9.0, 11.0, ACCENT).spacing(0.0, 3.0),
            bullet: ParagraphStyle::body(9.0, 12.0, TEXT).indent(12.0).spacing(0.0, 1.5),
            summary: ParagraphStyle::body(9.0, 12.5, TEXT)
                .align(TextAlign::Justify)
                .spacing(0.0, 4.0),
            skill_line: ParagraphStyle::body(8.5, 11.0, TEXT).spacing(0.0, 1.5),
        }
    }
}
