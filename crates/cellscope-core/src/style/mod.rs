//! Cell styling
//!
//! Styles here cover what the annotation layer needs: background fills for
//! color-coding classified cells and a bold flag for header rows. Styles are
//! deduplicated through a [`StylePool`] per worksheet.

mod color;
mod fill;
mod pool;

pub use color::Color;
pub use fill::FillStyle;
pub use pool::StylePool;

/// Complete style for a cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Background fill
    pub fill: FillStyle,
    /// Bold text
    pub bold: bool,
}

impl Style {
    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a solid background fill color
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = FillStyle::solid(color);
        self
    }

    /// Set bold text
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_builder() {
        let style = Style::new().fill_color(Color::YELLOW).bold(true);
        assert_eq!(style.fill, FillStyle::solid(Color::YELLOW));
        assert!(style.bold);
    }

    #[test]
    fn test_default_style() {
        let style = Style::default();
        assert!(style.fill.is_none());
        assert!(!style.bold);
    }
}
