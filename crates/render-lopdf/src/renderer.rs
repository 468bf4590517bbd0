use crate::layout::{LaidOutPage, LayoutEngine, PositionedElement};
use crate::metrics::to_win_ansi;
use crate::writer::PdfWriter;
use log::{debug, info};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use std::fs;
use std::io::Write;
use std::path::Path;
use vitae_render_core::{Block, RenderError};
use vitae_style::Stylesheet;
use vitae_types::Color;

/// Paginates a story and writes it as a PDF document.
pub struct PdfRenderer {
    stylesheet: Stylesheet,
}

impl PdfRenderer {
    pub fn new(stylesheet: Stylesheet) -> Self {
        Self { stylesheet }
    }

    /// Writes the document to `target` and returns the number of pages.
    pub fn render<W: Write>(&self, story: &[Block], title: Option<&str>, target: &mut W) -> Result<usize, RenderError> {
        if story.is_empty() {
            return Err(RenderError::EmptyDocument("story has no blocks".into()));
        }

        let pages = LayoutEngine::new(&self.stylesheet).paginate(story);
        let (width, height) = (self.stylesheet.page.width(), self.stylesheet.page.height());
        let mut writer = PdfWriter::new();
        for page in &pages {
            writer.write_page(paint(page, height), width, height)?;
        }
        let page_count = writer.page_count();
        writer.finish(title, target)?;
        debug!("Wrote {} page(s)", page_count);
        Ok(page_count)
    }

    /// Renders fully in memory before touching `path`, so a failed render
    /// leaves no partial file behind. Parent directories are created.
    pub fn render_to_path(&self, story: &[Block], title: Option<&str>, path: &Path) -> Result<usize, RenderError> {
        let mut bytes = Vec::new();
        let page_count = self.render(story, title, &mut bytes)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &bytes)?;
        info!("Wrote {} ({} page(s), {} bytes)", path.display(), page_count, bytes.len());
        Ok(page_count)
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new(Stylesheet::default())
    }
}

fn fill_color(color: Color) -> Operation {
    let [r, g, b] = color.to_unit_rgb();
    Operation::new("rg", vec![r.into(), g.into(), b.into()])
}

fn stroke_color(color: Color) -> Operation {
    let [r, g, b] = color.to_unit_rgb();
    Operation::new("RG", vec![r.into(), g.into(), b.into()])
}

/// Converts one laid-out page into content stream operations, flipping the
/// top-down layout coordinates into PDF user space.
fn paint(page: &LaidOutPage, page_height: f32) -> Content {
    let flip_y = |y: f32| page_height - y;
    let mut operations = Vec::new();

    for element in &page.elements {
        match element {
            PositionedElement::TextLine {
                baseline,
                font_size,
                color,
                word_spacing,
                segments,
            } => {
                operations.push(Operation::new("BT", vec![]));
                operations.push(fill_color(*color));
                operations.push(Operation::new("Tw", vec![(*word_spacing).into()]));
                for segment in segments {
                    operations.push(Operation::new(
                        "Tf",
                        vec![segment.font.resource_name().into(), (*font_size).into()],
                    ));
                    operations.push(Operation::new(
                        "Tm",
                        vec![
                            Object::Integer(1),
                            Object::Integer(0),
                            Object::Integer(0),
                            Object::Integer(1),
                            segment.x.into(),
                            flip_y(*baseline).into(),
                        ],
                    ));
                    operations.push(Operation::new(
                        "Tj",
                        vec![Object::String(to_win_ansi(&segment.text), StringFormat::Literal)],
                    ));
                }
                operations.push(Operation::new("ET", vec![]));
            }
            PositionedElement::Rule {
                x,
                y,
                width,
                thickness,
                color,
            } => {
                operations.push(Operation::new("w", vec![(*thickness).into()]));
                operations.push(stroke_color(*color));
                operations.push(Operation::new("m", vec![(*x).into(), flip_y(*y).into()]));
                operations.push(Operation::new("l", vec![(x + width).into(), flip_y(*y).into()]));
                operations.push(Operation::new("S", vec![]));
            }
        }
    }

    Content { operations }
}
