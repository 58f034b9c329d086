//! Fill styles for cell backgrounds

use super::Color;

/// Cell background fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillStyle {
    /// No fill
    #[default]
    None,
    /// Solid color fill
    Solid { color: Color },
}

impl FillStyle {
    /// Create a solid fill with the given color
    pub const fn solid(color: Color) -> Self {
        FillStyle::Solid { color }
    }

    /// Check if this is the no-fill variant
    pub fn is_none(&self) -> bool {
        matches!(self, FillStyle::None)
    }

    /// Get the fill color, if any
    pub fn color(&self) -> Option<Color> {
        match self {
            FillStyle::None => None,
            FillStyle::Solid { color } => Some(*color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_fill() {
        let fill = FillStyle::solid(Color::YELLOW);
        assert!(!fill.is_none());
        assert_eq!(fill.color(), Some(Color::YELLOW));
    }

    #[test]
    fn test_no_fill() {
        let fill = FillStyle::default();
        assert!(fill.is_none());
        assert_eq!(fill.color(), None);
    }
}
