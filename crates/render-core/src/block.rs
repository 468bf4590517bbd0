use vitae_style::{BlockRole, FontWeight};

/// A stretch of paragraph text set in a single weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub weight: FontWeight,
}

impl Run {
    pub fn regular(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            weight: FontWeight::Regular,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            weight: FontWeight::Bold,
        }
    }
}

/// One unit of the structured document handed to the layout engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph { role: BlockRole, runs: Vec<Run> },
    /// Vertical gap in points.
    Spacer(f32),
    /// Full-width horizontal divider.
    Rule,
}

impl Block {
    pub fn paragraph(role: BlockRole, text: impl Into<String>) -> Self {
        Block::Paragraph {
            role,
            runs: vec![Run::regular(text)],
        }
    }

    pub fn role(&self) -> Option<BlockRole> {
        match self {
            Block::Paragraph { role, .. } => Some(*role),
            _ => None,
        }
    }

    /// Concatenated run text, ignoring weight. `None` for spacers and rules.
    pub fn plain_text(&self) -> Option<String> {
        match self {
            Block::Paragraph { runs, .. } => Some(runs.iter().map(|run| run.text.as_str()).collect()),
            _ => None,
        }
    }
}

/// The flat, ordered block sequence for one document.
pub type Story = Vec<Block>;
