//! Line breaking and pagination of a story onto fixed-size pages.
//!
//! Coordinates produced here are measured from the top-left corner of the page;
//! the painter flips them into PDF user space.

use crate::metrics;
use log::debug;
use vitae_render_core::{Block, Run};
use vitae_style::{BlockRole, BuiltinFont, FontWeight, ParagraphStyle, Stylesheet, TextAlign};
use vitae_types::Color;

const LIST_MARKER: &str = "\u{2022} ";
/// Portion of the font size that sits above the baseline.
const ASCENT_RATIO: f32 = 0.8;

/// A stretch of one line set in a single face.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSegment {
    pub font: BuiltinFont,
    pub text: String,
    pub x: f32,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PositionedElement {
    TextLine {
        baseline: f32,
        font_size: f32,
        color: Color,
        /// Extra advance added to every space, non-zero only on justified lines.
        word_spacing: f32,
        segments: Vec<TextSegment>,
    },
    Rule {
        x: f32,
        y: f32,
        width: f32,
        thickness: f32,
        color: Color,
    },
}

impl PositionedElement {
    pub fn text(&self) -> Option<String> {
        match self {
            PositionedElement::TextLine { segments, .. } => Some(segments.iter().map(|s| s.text.as_str()).collect()),
            PositionedElement::Rule { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaidOutPage {
    pub elements: Vec<PositionedElement>,
}

pub struct LayoutEngine<'a> {
    stylesheet: &'a Stylesheet,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(stylesheet: &'a Stylesheet) -> Self {
        Self { stylesheet }
    }

    /// Flows `story` top to bottom, starting a new page whenever the next line
    /// would cross the bottom margin.
    pub fn paginate(&self, story: &[Block]) -> Vec<LaidOutPage> {
        let page = &self.stylesheet.page;
        let mut cursor = Cursor::new(page.margins.top, page.content_bottom());

        for block in story {
            match block {
                Block::Paragraph { role, runs } => self.place_paragraph(&mut cursor, *role, runs),
                Block::Spacer(height) => cursor.skip(*height),
                Block::Rule => self.place_rule(&mut cursor),
            }
        }

        let pages = cursor.finish();
        debug!("Laid out {} blocks onto {} page(s)", story.len(), pages.len());
        pages
    }

    fn place_paragraph(&self, cursor: &mut Cursor, role: BlockRole, runs: &[Run]) {
        let style = self.stylesheet.style(role);
        let marker = Run::regular(LIST_MARKER);
        let prefix = (role == BlockRole::ListItem).then_some(&marker);
        let tokens = tokenize(prefix.into_iter().chain(runs), style);

        let left = self.stylesheet.page.margins.left + style.left_indent;
        let available = self.stylesheet.page.content_width() - style.left_indent;
        let lines = break_lines(tokens, available, style.font_size);
        if lines.is_empty() {
            return;
        }

        if !cursor.page_is_empty() {
            cursor.y += style.space_before;
        }
        let count = lines.len();
        for (index, line) in lines.into_iter().enumerate() {
            cursor.reserve(style.leading);
            let baseline = cursor.y + (style.leading - style.font_size) / 2.0 + style.font_size * ASCENT_RATIO;
            let element = line.position(left, available, baseline, style, index + 1 == count);
            cursor.push(element);
            cursor.y += style.leading;
        }
        cursor.y += style.space_after;
    }

    fn place_rule(&self, cursor: &mut Cursor) {
        let rule = &self.stylesheet.rule;
        let page = &self.stylesheet.page;
        if !cursor.page_is_empty() {
            cursor.y += rule.space_before;
        }
        cursor.reserve(rule.thickness);
        cursor.push(PositionedElement::Rule {
            x: page.margins.left,
            y: cursor.y + rule.thickness / 2.0,
            width: page.content_width(),
            thickness: rule.thickness,
            color: rule.color,
        });
        cursor.y += rule.thickness + rule.space_after;
    }
}

/// Vertical position on the current page plus the pages filled so far.
struct Cursor {
    pages: Vec<LaidOutPage>,
    y: f32,
    top: f32,
    bottom: f32,
}

impl Cursor {
    fn new(top: f32, bottom: f32) -> Self {
        Self {
            pages: vec![LaidOutPage::default()],
            y: top,
            top,
            bottom,
        }
    }

    fn page_is_empty(&self) -> bool {
        self.pages.last().is_none_or(|page| page.elements.is_empty())
    }

    /// Breaks to a fresh page unless `height` still fits. An empty page always
    /// takes the element so oversized content cannot loop forever.
    fn reserve(&mut self, height: f32) {
        if self.y + height > self.bottom && !self.page_is_empty() {
            self.pages.push(LaidOutPage::default());
            self.y = self.top;
        }
    }

    fn skip(&mut self, height: f32) {
        if self.page_is_empty() {
            return;
        }
        if self.y + height > self.bottom {
            self.pages.push(LaidOutPage::default());
            self.y = self.top;
        } else {
            self.y += height;
        }
    }

    fn push(&mut self, element: PositionedElement) {
        if let Some(page) = self.pages.last_mut() {
            page.elements.push(element);
        }
    }

    fn finish(self) -> Vec<LaidOutPage> {
        self.pages.into_iter().filter(|page| !page.elements.is_empty()).collect()
    }
}

#[derive(Debug, Clone)]
struct Token<'t> {
    text: &'t str,
    font: BuiltinFont,
    width: f32,
    /// Whether whitespace separated this word from the previous one.
    space_before: bool,
}

fn tokenize<'t>(runs: impl Iterator<Item = &'t Run>, style: &ParagraphStyle) -> Vec<Token<'t>> {
    let mut tokens = Vec::new();
    let mut pending_space = false;
    for run in runs {
        let weight = match style.font_weight {
            FontWeight::Bold => FontWeight::Bold,
            FontWeight::Regular => run.weight,
        };
        let font = BuiltinFont::for_weight(weight);
        for (index, word) in run.text.split(char::is_whitespace).enumerate() {
            if index > 0 {
                pending_space = true;
            }
            if word.is_empty() {
                continue;
            }
            tokens.push(Token {
                text: word,
                font,
                width: metrics::text_width(font, word, style.font_size),
                space_before: pending_space && !tokens.is_empty(),
            });
            pending_space = false;
        }
    }
    tokens
}

#[derive(Debug, Default)]
struct Line<'t> {
    tokens: Vec<Token<'t>>,
    width: f32,
}

fn space_width(font: BuiltinFont, size: f32) -> f32 {
    metrics::text_width(font, " ", size)
}

/// Greedy fill: a word moves to the next line when it would overflow, but only
/// at a whitespace boundary. A single word wider than the line overflows.
fn break_lines(tokens: Vec<Token<'_>>, available: f32, size: f32) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut line = Line::default();
    for token in tokens {
        let breakable = token.space_before && !line.tokens.is_empty();
        let gap = if breakable { space_width(token.font, size) } else { 0.0 };
        if breakable && line.width + gap + token.width > available {
            lines.push(std::mem::take(&mut line));
            line.width = token.width;
        } else {
            line.width += gap + token.width;
        }
        line.tokens.push(token);
    }
    if !line.tokens.is_empty() {
        lines.push(line);
    }
    lines
}

impl Line<'_> {
    fn position(&self, left: f32, available: f32, baseline: f32, style: &ParagraphStyle, last: bool) -> PositionedElement {
        let gaps = self.tokens.iter().skip(1).filter(|token| token.space_before).count();
        let slack = (available - self.width).max(0.0);
        let (offset, word_spacing) = match style.text_align {
            TextAlign::Center => (slack / 2.0, 0.0),
            TextAlign::Justify if !last && gaps > 0 => (0.0, slack / gaps as f32),
            TextAlign::Left | TextAlign::Justify => (0.0, 0.0),
        };

        let mut segments: Vec<TextSegment> = Vec::new();
        let mut x = left + offset;
        for (index, token) in self.tokens.iter().enumerate() {
            let spaced = index > 0 && token.space_before;
            let width = if spaced {
                token.width + space_width(token.font, style.font_size) + word_spacing
            } else {
                token.width
            };
            let text = if spaced { [" ", token.text].concat() } else { token.text.to_string() };
            match segments.last_mut() {
                Some(segment) if segment.font == token.font => {
                    segment.text.push_str(&text);
                    segment.width += width;
                }
                _ => segments.push(TextSegment {
                    font: token.font,
                    text,
                    x,
                    width,
                }),
            }
            x += width;
        }

        PositionedElement::TextLine {
            baseline,
            font_size: style.font_size,
            color: style.color,
            word_spacing,
            segments,
        }
    }
}
