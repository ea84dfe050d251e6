use std::collections::VecDeque;
use std::time::{Duration, Instant};

const TOAST_TTL: Duration = Duration::from_secs(4);
const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    #[allow(dead_code)]
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub description: String,
    pub kind: NotificationKind,
    pub closable: bool,
}

impl Notification {
    pub fn new(description: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            description: description.into(),
            kind,
            closable: true,
        }
    }
}

/// Where user-facing outcome messages go. Fire and forget.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    expires_at: Instant,
}

/// Short-lived toasts shown at the bottom of the terminal.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[cfg(test)]
    pub fn latest(&self) -> Option<&Notification> {
        self.toasts.back().map(|t| &t.notification)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn expire(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    /// Dismiss the newest closable toast.
    pub fn dismiss_latest(&mut self) {
        if let Some(pos) = self
            .toasts
            .iter()
            .rposition(|t| t.notification.closable)
        {
            self.toasts.remove(pos);
        }
    }

    fn push_at(&mut self, notification: Notification, now: Instant) {
        self.toasts.push_back(Toast {
            notification,
            expires_at: now + TOAST_TTL,
        });
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }
}
