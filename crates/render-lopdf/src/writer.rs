use lopdf::content::Content;
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::io::Write;
use vitae_render_core::RenderError;
use vitae_style::BuiltinFont;

use crate::metrics::to_win_ansi;

const PDF_VERSION: &str = "1.7";

/// Collects page content streams and writes the finished document.
///
/// Both Helvetica faces are registered once in a shared resource dictionary as
/// unembedded Type1 fonts with WinAnsiEncoding.
pub struct PdfWriter {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
}

impl PdfWriter {
    pub fn new() -> Self {
        let mut document = Document::with_version(PDF_VERSION);
        let pages_id = document.new_object_id();

        let mut fonts = Dictionary::new();
        for font in BuiltinFont::ALL {
            let font_dict = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            };
            let font_id = document.add_object(font_dict);
            fonts.set(font.resource_name(), font_id);
        }
        let resources_id = document.add_object(dictionary! { "Font" => fonts });

        Self {
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
        }
    }

    pub fn write_page(&mut self, content: Content, width: f32, height: f32) -> Result<ObjectId, RenderError> {
        let bytes = content.encode().map_err(|e| RenderError::Pdf(e.to_string()))?;
        let content_id = self.document.add_object(Stream::new(dictionary! {}, bytes));
        let page_id = self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), width.into(), height.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.page_ids.push(page_id);
        Ok(page_id)
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    pub fn finish<W: Write>(mut self, title: Option<&str>, target: &mut W) -> Result<(), RenderError> {
        if self.page_ids.is_empty() {
            return Err(RenderError::EmptyDocument("no pages were written".into()));
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.document.objects.insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.document.trailer.set("Root", catalog_id);

        if let Some(title) = title {
            let info_id = self.document.add_object(dictionary! {
                "Title" => Object::String(to_win_ansi(title), StringFormat::Literal),
            });
            self.document.trailer.set("Info", info_id);
        }

        self.document.save_to(target).map_err(|e| RenderError::Pdf(e.to_string()))?;
        Ok(())
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}
