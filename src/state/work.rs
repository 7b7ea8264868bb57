//! Case study expand/collapse state for the Work page.

use crate::content;

/// Selection and expansion state for the case study list.
///
/// At most one case study is expanded at a time; expanding one
/// collapses whatever was open.
#[derive(Debug, Clone, Default)]
pub struct WorkState {
    /// Index of the case study under the cursor.
    pub cursor: usize,
    /// Index of the expanded case study, if any.
    pub expanded: Option<usize>,
}

impl WorkState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) {
        self.cursor = (self.cursor + 1) % content::PROJECTS.len();
    }

    pub fn prev(&mut self) {
        self.cursor = self
            .cursor
            .checked_sub(1)
            .unwrap_or(content::PROJECTS.len() - 1);
    }

    /// Toggle expansion of the case study under the cursor. Expanding
    /// one collapses any other.
    pub fn toggle(&mut self) {
        self.expanded = if self.expanded == Some(self.cursor) {
            None
        } else {
            Some(self.cursor)
        };
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Collapse everything and reset the cursor. Called when the page
    /// is navigated away from.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let w = WorkState::new();
        assert_eq!(w.expanded, None);
        assert_eq!(w.cursor, 0);
    }

    #[test]
    fn test_toggle_expands_and_collapses() {
        let mut w = WorkState::new();
        w.toggle();
        assert!(w.is_expanded(0));
        w.toggle();
        assert_eq!(w.expanded, None);
    }

    #[test]
    fn test_expanding_another_collapses_previous() {
        let mut w = WorkState::new();
        w.toggle();
        w.next();
        w.toggle();
        assert!(!w.is_expanded(0));
        assert!(w.is_expanded(1));
    }

    #[test]
    fn test_cursor_wraps() {
        let mut w = WorkState::new();
        w.prev();
        assert_eq!(w.cursor, content::PROJECTS.len() - 1);
        w.next();
        assert_eq!(w.cursor, 0);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut w = WorkState::new();
        w.next();
        w.toggle();
        w.reset();
        assert_eq!(w.cursor, 0);
        assert_eq!(w.expanded, None);
    }
}
