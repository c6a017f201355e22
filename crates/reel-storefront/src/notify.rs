//! Transient notification display.

use serde::Serialize;

/// How long a notice stays visible, in milliseconds.
pub const NOTICE_TTL_MS: i64 = 3_000;

/// A message currently on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// The message text.
    pub message: String,
    /// Millisecond timestamp at which the notice auto-dismisses.
    pub dismiss_at: i64,
}

/// Latest-wins notification state.
///
/// There is no message queue and at most one pending dismiss timer: a new
/// `notify` call replaces the visible message and restarts the window.
/// Deadlines are explicit millisecond timestamps supplied by the host
/// loop, so the behavior is deterministic and testable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifier {
    current: Option<Notice>,
}

impl Notifier {
    /// Create an idle notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message and (re)start the auto-dismiss window.
    pub fn notify(&mut self, message: impl Into<String>, now_ms: i64) {
        self.current = Some(Notice {
            message: message.into(),
            dismiss_at: now_ms + NOTICE_TTL_MS,
        });
    }

    /// The visible notice, if any.
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// The visible message text, if any.
    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    /// Dismiss the notice once its deadline has passed.
    ///
    /// Returns `true` if a notice was dismissed by this call.
    pub fn tick(&mut self, now_ms: i64) -> bool {
        match &self.current {
            Some(notice) if now_ms >= notice.dismiss_at => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_auto_dismisses() {
        let mut notifier = Notifier::new();
        notifier.notify("added to cart", 1_000);
        assert_eq!(notifier.message(), Some("added to cart"));

        // Still inside the window.
        assert!(!notifier.tick(1_000 + NOTICE_TTL_MS - 1));
        assert!(notifier.message().is_some());

        assert!(notifier.tick(1_000 + NOTICE_TTL_MS));
        assert_eq!(notifier.message(), None);
    }

    #[test]
    fn test_new_notice_restarts_window() {
        let mut notifier = Notifier::new();
        notifier.notify("first", 0);
        notifier.notify("second", 2_000);

        // The first notice's deadline has passed, but the second call
        // replaced it and restarted the window.
        assert!(!notifier.tick(NOTICE_TTL_MS + 1));
        assert_eq!(notifier.message(), Some("second"));

        assert!(notifier.tick(2_000 + NOTICE_TTL_MS));
        assert_eq!(notifier.message(), None);
    }

    #[test]
    fn test_tick_when_idle() {
        let mut notifier = Notifier::new();
        assert!(!notifier.tick(10_000));
    }
}
