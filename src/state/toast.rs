//! Transient toast notifications.
//!
//! A toast is display-only and fire-and-forget: it is shown for a fixed
//! number of ticks and then dismissed. Nothing awaits or observes it.

#[derive(Debug, Clone, Default)]
pub struct Toast {
    message: Option<String>,
    remaining: u16,
}

impl Toast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message for `ticks` ticks, replacing any current toast.
    pub fn show(&mut self, message: impl Into<String>, ticks: u16) {
        let message = message.into();
        tracing::debug!(%message, "toast shown");
        self.message = Some(message);
        self.remaining = ticks;
    }

    pub fn visible(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Count down one tick. Returns true when the toast just expired
    /// and the frame needs a redraw to clear it.
    pub fn tick(&mut self) -> bool {
        if self.message.is_none() {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.message = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let t = Toast::new();
        assert!(!t.visible());
        assert_eq!(t.message(), None);
    }

    #[test]
    fn test_show_then_expire() {
        let mut t = Toast::new();
        t.show("Thanks!", 3);
        assert!(t.visible());
        assert_eq!(t.message(), Some("Thanks!"));
        assert!(!t.tick());
        assert!(!t.tick());
        // Third tick expires and reports the transition
        assert!(t.tick());
        assert!(!t.visible());
    }

    #[test]
    fn test_tick_when_hidden_is_quiet() {
        let mut t = Toast::new();
        assert!(!t.tick());
    }

    #[test]
    fn test_show_replaces_current_toast() {
        let mut t = Toast::new();
        t.show("first", 10);
        t.show("second", 2);
        assert_eq!(t.message(), Some("second"));
        t.tick();
        assert!(t.tick());
        assert!(!t.visible());
    }
}
