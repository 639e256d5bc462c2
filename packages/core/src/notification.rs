//! Transient toast notifications

use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "\u{2714}", // ✔
            NotificationKind::Error => "\u{2716}",   // ✖
            NotificationKind::Info => "\u{2139}",    // ℹ
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        match chrono::Duration::from_std(ttl) {
            Ok(ttl) => now - self.created_at >= ttl,
            Err(_) => false,
        }
    }
}

/// Live notifications, oldest first
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    ttl: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Duration::from_millis(4000))
    }
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: Vec::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> Uuid {
        let notification = Notification::new(kind, message);
        let id = notification.id;
        self.items.push(notification);
        id
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.items.retain(|n| n.id != id);
    }

    /// Drop every notification older than the TTL
    pub fn prune(&mut self, now: DateTime<Utc>) {
        let ttl = self.ttl;
        self.items.retain(|n| !n.is_expired(now, ttl));
    }

    /// Drop every notification that has outlived the TTL as of now
    pub fn prune_expired(&mut self) {
        self.prune(Utc::now());
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut center = NotificationCenter::default();
        let first = center.push(NotificationKind::Success, "Saved");
        center.push(NotificationKind::Error, "Failed");
        assert_eq!(center.items().len(), 2);

        center.dismiss(first);
        assert_eq!(center.items().len(), 1);
        assert_eq!(center.items()[0].message, "Failed");
    }

    #[test]
    fn test_prune_drops_expired() {
        let mut center = NotificationCenter::new(Duration::from_secs(4));
        center.push(NotificationKind::Info, "Hello");

        let created = center.items()[0].created_at;
        center.prune(created + chrono::Duration::seconds(3));
        assert_eq!(center.items().len(), 1, "still within TTL");

        center.prune(created + chrono::Duration::seconds(4));
        assert!(center.is_empty(), "expired at TTL");
    }

    #[test]
    fn test_prune_expired_uses_the_clock() {
        let mut lasting = NotificationCenter::new(Duration::from_secs(3600));
        lasting.push(NotificationKind::Success, "Added to cart");
        lasting.prune_expired();
        assert_eq!(lasting.items().len(), 1);

        let mut instant = NotificationCenter::new(Duration::ZERO);
        instant.push(NotificationKind::Success, "Added to cart");
        instant.prune_expired();
        assert!(instant.is_empty());
    }
}
