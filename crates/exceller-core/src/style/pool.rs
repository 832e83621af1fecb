//! Style deduplication

use ahash::AHashMap;

use super::Style;

/// Deduplicated styles addressed by index
///
/// Index 0 is always the default style. Inserting a style that is already
/// present returns its existing index.
#[derive(Debug, Clone)]
pub struct StylePool {
    styles: Vec<Style>,
    index: AHashMap<Style, u32>,
}

impl StylePool {
    /// Create a pool holding only the default style
    pub fn new() -> Self {
        let mut pool = Self {
            styles: Vec::new(),
            index: AHashMap::new(),
        };
        pool.get_or_insert(Style::default());
        pool
    }

    /// Index of `style`, inserting it if needed
    pub fn get_or_insert(&mut self, style: Style) -> u32 {
        if let Some(&idx) = self.index.get(&style) {
            return idx;
        }
        let idx = self.styles.len() as u32;
        self.styles.push(style.clone());
        self.index.insert(style, idx);
        idx
    }

    pub fn get(&self, idx: u32) -> Option<&Style> {
        self.styles.get(idx as usize)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Styles in index order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Style)> {
        self.styles.iter().enumerate().map(|(i, s)| (i as u32, s))
    }
}

impl Default for StylePool {
    fn default() -> Self {
        Self::new()
    }
}
