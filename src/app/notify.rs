//! Transient notifications ("toasts").
//!
//! At most one notification is visible. Showing a new one replaces the current
//! one and asks the runtime for a fresh dismissal timer. Timers cannot be
//! cancelled, so every timer that fires retires the oldest pending sequence
//! number and only clears the notification it was scheduled for.

use std::collections::VecDeque;

/// Seconds a notification stays on screen.
pub const DISMISS_AFTER_SECS: f64 = 3.0;

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    seq: u64,
}

/// Holder of the single visible notification.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    current: Option<Notification>,
    pending: VecDeque<u64>,
    next_seq: u64,
}

impl Notifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message`, replacing whatever is visible.
    ///
    /// The caller must schedule one dismissal timer per call.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        let seq = self.next_seq;
        self.next_seq += 1;

        let message = message.into();
        tracing::debug!(seq, ?kind, message = %message, "notification shown");

        self.current = Some(Notification { message, kind, seq });
        self.pending.push_back(seq);
    }

    /// Handles one elapsed dismissal timer.
    ///
    /// Returns true when the visible notification was removed.
    pub fn on_timer(&mut self) -> bool {
        let Some(seq) = self.pending.pop_front() else {
            return false;
        };

        if self.current.as_ref().is_some_and(|current| current.seq == seq) {
            tracing::debug!(seq, "notification dismissed");
            self.current = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_notification_replaces_older() {
        let mut notifier = Notifier::new();
        notifier.notify("first", NotificationKind::Info);
        notifier.notify("second", NotificationKind::Error);

        let current = notifier.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.kind, NotificationKind::Error);
    }

    #[test]
    fn stale_timer_keeps_the_replacement_visible() {
        let mut notifier = Notifier::new();
        notifier.notify("first", NotificationKind::Info);
        notifier.notify("second", NotificationKind::Success);

        assert!(!notifier.on_timer());
        assert_eq!(notifier.current().unwrap().message, "second");

        assert!(notifier.on_timer());
        assert!(notifier.current().is_none());
    }

    #[test]
    fn spurious_timer_is_ignored() {
        let mut notifier = Notifier::new();
        assert!(!notifier.on_timer());

        notifier.notify("only", NotificationKind::Info);
        assert!(notifier.on_timer());
        assert!(!notifier.on_timer());
    }
}
