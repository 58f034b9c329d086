//! Style pool for efficient style deduplication

use std::hash::{Hash, Hasher};

use ahash::AHashMap;

use super::Style;

/// Key for style lookup (hash of style properties)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct StyleKey(u64);

impl StyleKey {
    fn from_style(style: &Style) -> Self {
        let mut hasher = ahash::AHasher::default();
        style.hash(&mut hasher);
        StyleKey(hasher.finish())
    }
}

/// Pool of unique styles shared by all cells in a worksheet
///
/// Styles are deduplicated: annotating thousands of cells with the same
/// fill color stores one style and many small indices. Index 0 is always
/// the default style.
#[derive(Debug, Clone)]
pub struct StylePool {
    /// All unique styles (index 0 is the default style)
    styles: Vec<Style>,
    /// Lookup from style hash to index
    lookup: AHashMap<StyleKey, u32>,
}

impl StylePool {
    /// Create a new pool containing only the default style
    pub fn new() -> Self {
        let default_style = Style::default();
        let key = StyleKey::from_style(&default_style);

        let mut lookup = AHashMap::new();
        lookup.insert(key, 0);

        Self {
            styles: vec![default_style],
            lookup,
        }
    }

    /// Get the index for a style, inserting it if not present
    pub fn get_or_insert(&mut self, style: Style) -> u32 {
        let key = StyleKey::from_style(&style);

        if let Some(&index) = self.lookup.get(&key) {
            // Verify it's actually the same style (hash collision check)
            if self.styles[index as usize] == style {
                return index;
            }
            // Hash collision: fall back to a linear scan
            for (i, existing) in self.styles.iter().enumerate() {
                if *existing == style {
                    return i as u32;
                }
            }
        }

        let index = self.styles.len() as u32;
        self.styles.push(style);
        self.lookup.insert(key, index);
        index
    }

    /// Get a style by index
    pub fn get(&self, index: u32) -> Option<&Style> {
        self.styles.get(index as usize)
    }

    /// Get the default style
    pub fn default_style(&self) -> &Style {
        &self.styles[0]
    }

    /// Number of unique styles in the pool
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the pool only contains the default style
    pub fn is_empty(&self) -> bool {
        self.styles.len() <= 1
    }

    /// Iterate over all styles with their indices
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Style)> {
        self.styles
            .iter()
            .enumerate()
            .map(|(i, style)| (i as u32, style))
    }
}

impl Default for StylePool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, FillStyle};

    #[test]
    fn test_default_style_at_zero() {
        let pool = StylePool::new();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get(0), Some(&Style::default()));
    }

    #[test]
    fn test_deduplication() {
        let mut pool = StylePool::new();

        let style = Style::new().fill_color(Color::YELLOW);
        let idx1 = pool.get_or_insert(style.clone());
        let idx2 = pool.get_or_insert(style);

        assert_eq!(idx1, idx2);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_distinct_styles_get_distinct_indices() {
        let mut pool = StylePool::new();

        let yellow = pool.get_or_insert(Style::new().fill_color(Color::YELLOW));
        let red = pool.get_or_insert(Style::new().fill_color(Color::RED));

        assert_ne!(yellow, red);
        assert_eq!(
            pool.get(yellow).unwrap().fill,
            FillStyle::solid(Color::YELLOW)
        );
        assert_eq!(pool.get(red).unwrap().fill, FillStyle::solid(Color::RED));
    }

    #[test]
    fn test_default_style_reuses_index_zero() {
        let mut pool = StylePool::new();
        let idx = pool.get_or_insert(Style::default());
        assert_eq!(idx, 0);
        assert_eq!(pool.len(), 1);
    }
}
