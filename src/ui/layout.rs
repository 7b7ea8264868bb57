//! Responsive layout system.
//!
//! `LayoutContext` encapsulates terminal dimensions and answers the
//! sizing questions render functions ask: which breakpoint applies,
//! how wide the readable content column should be, and whether the
//! navigation collapses into a menu.

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Size category for responsive design decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    /// Extra small (< 60 cols)
    ExtraSmall,
    /// Small (< 80 cols)
    Small,
    /// Medium (< 120 cols)
    Medium,
    /// Large (>= 120 cols)
    Large,
}

// ============================================================================
// Layout Context
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn size_category(&self) -> SizeCategory {
        if self.width < breakpoints::XS_WIDTH {
            SizeCategory::ExtraSmall
        } else if self.width < breakpoints::SM_WIDTH {
            SizeCategory::Small
        } else if self.width < breakpoints::MD_WIDTH {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    /// Narrow presentation: the destination list collapses behind a
    /// menu toggle instead of rendering inline.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Width of the readable content column, after the outer margin.
    /// Very wide terminals cap the column so paragraphs stay legible.
    pub fn content_width(&self) -> u16 {
        let usable = self.width.saturating_sub(4).max(1);
        usable.min(100)
    }

    /// Whether multi-column sections (metric grids, skill lists) should
    /// stack vertically instead.
    pub fn should_stack(&self) -> bool {
        self.is_narrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_categories() {
        assert_eq!(LayoutContext::new(50, 20).size_category(), SizeCategory::ExtraSmall);
        assert_eq!(LayoutContext::new(70, 20).size_category(), SizeCategory::Small);
        assert_eq!(LayoutContext::new(100, 30).size_category(), SizeCategory::Medium);
        assert_eq!(LayoutContext::new(160, 50).size_category(), SizeCategory::Large);
    }

    #[test]
    fn test_narrow_boundary() {
        assert!(LayoutContext::new(79, 24).is_narrow());
        assert!(!LayoutContext::new(80, 24).is_narrow());
    }

    #[test]
    fn test_content_width_caps_wide_terminals() {
        assert_eq!(LayoutContext::new(200, 50).content_width(), 100);
        assert_eq!(LayoutContext::new(84, 24).content_width(), 80);
    }

    #[test]
    fn test_content_width_never_zero() {
        assert_eq!(LayoutContext::new(2, 10).content_width(), 1);
    }

    #[test]
    fn test_stacking_follows_narrow() {
        assert!(LayoutContext::new(60, 24).should_stack());
        assert!(!LayoutContext::new(120, 40).should_stack());
    }
}
