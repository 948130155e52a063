//! Single-slot transient notifications.
//!
//! Showing a notification replaces whatever is on screen. A notification
//! leaves either through [`NotificationCenter::dismiss`] (the close control)
//! or through [`NotificationCenter::expire`] once its timeout has passed.

use std::time::Duration;
use tokio::time::Instant;

/// Visual treatment of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub text: String,
    pub severity: Severity,
    pub shown_at: Instant,
}

#[derive(Debug)]
pub struct NotificationCenter {
    current: Option<Notification>,
    next_id: u64,
    timeout: Duration,
}

impl NotificationCenter {
    pub fn new(timeout: Duration) -> Self {
        Self {
            current: None,
            next_id: 0,
            timeout,
        }
    }

    /// Show a notification now, replacing the visible one
    pub fn show(&mut self, text: impl Into<String>, severity: Severity) -> NotificationId {
        self.show_at(text, severity, Instant::now())
    }

    pub fn show_at(&mut self, text: impl Into<String>, severity: Severity, now: Instant) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);

        self.current = Some(Notification {
            id,
            text: text.into(),
            severity,
            shown_at: now,
        });

        id
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Remove the notification if it is still the visible one.
    /// Returns false when it was already gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match &self.current {
            Some(n) if n.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Close control: dismiss whatever is visible
    pub fn dismiss_current(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Auto-dismiss once the timeout has elapsed since it was shown
    pub fn expire(&mut self, now: Instant) -> Option<NotificationId> {
        let expired = self
            .current
            .as_ref()
            .filter(|n| now.saturating_duration_since(n.shown_at) >= self.timeout)
            .map(|n| n.id)?;

        self.current = None;
        Some(expired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notification_replaces_current() {
        let mut center = NotificationCenter::new(Duration::from_secs(5));
        let first = center.show("Sending message...", Severity::Info);
        let second = center.show("ok", Severity::Success);

        assert_ne!(first, second);
        let visible = center.current().unwrap();
        assert_eq!(visible.id, second);
        assert_eq!(visible.text, "ok");
        // The replaced one can no longer be dismissed
        assert!(!center.dismiss(first));
        assert!(center.current().is_some());
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut center = NotificationCenter::new(Duration::from_secs(5));
        let id = center.show("bad", Severity::Error);

        assert!(center.dismiss(id));
        assert!(!center.dismiss(id));
        assert!(!center.dismiss_current());
        assert!(center.current().is_none());
    }

    #[test]
    fn test_expires_after_timeout() {
        let mut center = NotificationCenter::new(Duration::from_millis(5000));
        let start = Instant::now();
        let id = center.show_at("hello", Severity::Info, start);

        assert_eq!(center.expire(start + Duration::from_millis(4999)), None);
        assert!(center.current().is_some());

        assert_eq!(center.expire(start + Duration::from_millis(5000)), Some(id));
        assert!(center.current().is_none());

        // Nothing left to expire
        assert_eq!(center.expire(start + Duration::from_secs(60)), None);
    }

    #[test]
    fn test_replacement_restarts_timer() {
        let mut center = NotificationCenter::new(Duration::from_millis(100));
        let start = Instant::now();
        center.show_at("one", Severity::Info, start);
        let second = center.show_at("two", Severity::Info, start + Duration::from_millis(80));

        assert_eq!(center.expire(start + Duration::from_millis(120)), None);
        assert_eq!(center.expire(start + Duration::from_millis(180)), Some(second));
    }

    #[test]
    fn test_manual_dismiss_before_expiry() {
        let mut center = NotificationCenter::new(Duration::from_millis(100));
        let start = Instant::now();
        center.show_at("closing", Severity::Success, start);

        assert!(center.dismiss_current());
        assert_eq!(center.expire(start + Duration::from_millis(200)), None);
    }

    #[test]
    fn test_severity_labels() {
        assert_eq!(Severity::Success.as_str(), "success");
        assert_eq!(Severity::Error.as_str(), "error");
        assert_eq!(Severity::Info.as_str(), "info");
    }
}
