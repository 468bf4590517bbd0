//! Page geometry: sizes and margins in PDF points.

pub const POINTS_PER_INCH: f32 = 72.0;

pub fn inches(value: f32) -> f32 {
    value * POINTS_PER_INCH
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    /// Vertical margins first, horizontal second, like the CSS two-value shorthand.
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// Sheet dimensions in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub const A4: PageSize = PageSize {
        width: 595.28,
        height: 841.89,
    };
}

impl Default for PageSize {
    fn default() -> Self {
        Self::A4
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageLayout {
    pub size: PageSize,
    pub margins: Margins,
}

impl PageLayout {
    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Horizontal space between the left and right margins.
    pub fn content_width(&self) -> f32 {
        self.width() - self.margins.left - self.margins.right
    }

    /// Y coordinate (measured from the top edge) below which nothing may be placed.
    pub fn content_bottom(&self) -> f32 {
        self.height() - self.margins.bottom
    }
}
