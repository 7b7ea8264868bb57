//! Viewport scroll state with eased scroll-to-top.
//!
//! Every navigation re-arms an ease toward offset 0. The easing runs
//! on the 16ms tick; when smooth scrolling is disabled the offset
//! jumps to 0 instantly, which is a degraded behavior, not a failure.

/// Fraction of the remaining distance covered per tick.
const EASE_FACTOR: f32 = 0.75;

/// Distance below which the animation snaps to its target.
const SNAP_EPSILON: f32 = 0.5;

#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Fractional scroll position (0 = top of the page).
    offset: f32,
    /// Maximum offset, clamped from content height during render.
    max: u16,
    /// True while the ease-to-top animation is running.
    animating: bool,
    /// When false, `ease_to_top` jumps instantly.
    smooth: bool,
}

impl ScrollState {
    pub fn new(smooth: bool) -> Self {
        Self {
            offset: 0.0,
            max: 0,
            animating: false,
            smooth,
        }
    }

    /// Whole-line offset for rendering.
    pub fn line_offset(&self) -> u16 {
        self.offset.round() as u16
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn is_smooth(&self) -> bool {
        self.smooth
    }

    pub fn max(&self) -> u16 {
        self.max
    }

    /// Start easing toward the top. Fires unconditionally on every
    /// navigation, including same-page navigation.
    pub fn ease_to_top(&mut self) {
        if self.smooth && self.offset > 0.0 {
            self.animating = true;
        } else {
            self.offset = 0.0;
            self.animating = false;
        }
    }

    /// Manual scroll by a line delta. Cancels any running animation.
    pub fn scroll_by(&mut self, delta: i32) {
        self.animating = false;
        let next = self.offset + delta as f32;
        self.offset = next.clamp(0.0, self.max as f32);
    }

    /// Jump straight to the bottom of the content.
    pub fn jump_to_bottom(&mut self) {
        self.animating = false;
        self.offset = self.max as f32;
    }

    /// Jump straight to the top, skipping the animation.
    pub fn jump_to_top(&mut self) {
        self.animating = false;
        self.offset = 0.0;
    }

    /// Clamp against the current content height. Called during render
    /// once the page's line count is known.
    pub fn set_max(&mut self, max: u16) {
        self.max = max;
        if self.offset > max as f32 {
            self.offset = max as f32;
        }
    }

    /// Advance the animation by one tick. Returns true when the offset
    /// changed and the frame needs a redraw.
    pub fn tick(&mut self) -> bool {
        if !self.animating {
            return false;
        }
        self.offset *= 1.0 - EASE_FACTOR;
        if self.offset < SNAP_EPSILON {
            self.offset = 0.0;
            self.animating = false;
        }
        true
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrolled(smooth: bool) -> ScrollState {
        let mut s = ScrollState::new(smooth);
        s.set_max(100);
        s.scroll_by(40);
        s
    }

    #[test]
    fn test_starts_at_top() {
        let s = ScrollState::new(true);
        assert_eq!(s.line_offset(), 0);
        assert!(!s.is_animating());
    }

    #[test]
    fn test_scroll_by_clamps_to_bounds() {
        let mut s = ScrollState::new(true);
        s.set_max(10);
        s.scroll_by(-5);
        assert_eq!(s.line_offset(), 0);
        s.scroll_by(50);
        assert_eq!(s.line_offset(), 10);
    }

    #[test]
    fn test_ease_converges_to_zero_without_overshoot() {
        let mut s = scrolled(true);
        s.ease_to_top();
        assert!(s.is_animating());
        let mut last = s.line_offset();
        for _ in 0..64 {
            s.tick();
            assert!(s.line_offset() <= last, "offset must decrease monotonically");
            last = s.line_offset();
        }
        assert_eq!(s.line_offset(), 0);
        assert!(!s.is_animating());
    }

    #[test]
    fn test_ease_is_instant_when_smooth_disabled() {
        let mut s = scrolled(false);
        s.ease_to_top();
        assert_eq!(s.line_offset(), 0);
        assert!(!s.is_animating());
    }

    #[test]
    fn test_ease_at_top_is_noop() {
        let mut s = ScrollState::new(true);
        s.ease_to_top();
        assert!(!s.is_animating());
        assert!(!s.tick());
    }

    #[test]
    fn test_manual_scroll_cancels_animation() {
        let mut s = scrolled(true);
        s.ease_to_top();
        assert!(s.is_animating());
        s.scroll_by(3);
        assert!(!s.is_animating());
    }

    #[test]
    fn test_set_max_clamps_current_offset() {
        let mut s = scrolled(true);
        s.set_max(5);
        assert_eq!(s.line_offset(), 5);
    }
}
