// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record and the `Kind` enum
//! used throughout the notification system. Records are only built by
//! [`Notifier::notify`](super::Notifier::notify).

use crate::ui::design_tokens::palette;
use chrono::{DateTime, Utc};
use iced::Color;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a notification.
///
/// Ids come from a process-wide counter and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw counter value, for logging.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of a notification. Determines icon and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Success,
    Info,
    Warning,
    Error,
}

impl Kind {
    /// Every kind, in display order.
    pub const ALL: [Kind; 4] = [Kind::Success, Kind::Info, Kind::Warning, Kind::Error];

    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Info => palette::INFO_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Error => palette::ERROR_500,
        }
    }

    /// Glyph rendered in the toast and panel icon slot.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Kind::Success => "✔",
            Kind::Info => "ℹ",
            Kind::Warning => "⚠",
            Kind::Error => "✖",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Info => "info",
            Kind::Warning => "warning",
            Kind::Error => "error",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notification held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    title: Option<String>,
    message: String,
    created_at: DateTime<Utc>,
    read: bool,
}

impl Notification {
    pub(crate) fn new(kind: Kind, message: String, title: Option<String>) -> Self {
        Self {
            id: NotificationId::next(),
            kind,
            title,
            message,
            created_at: Utc::now(),
            read: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn is_read(&self) -> bool {
        self.read
    }

    /// Flags the record as read. Returns `true` if it was unread.
    pub(crate) fn mark_read(&mut self) -> bool {
        !std::mem::replace(&mut self.read, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::new(Kind::Info, "a".into(), None);
        let n2 = Notification::new(Kind::Info, "a".into(), None);
        assert_ne!(n1.id(), n2.id());
        assert!(n2.id() > n1.id());
    }

    #[test]
    fn new_notification_is_unread() {
        let n = Notification::new(Kind::Warning, "careful".into(), Some("Heads up".into()));
        assert!(!n.is_read());
        assert_eq!(n.kind(), Kind::Warning);
        assert_eq!(n.title(), Some("Heads up"));
        assert_eq!(n.message(), "careful");
    }

    #[test]
    fn mark_read_reports_transition_once() {
        let mut n = Notification::new(Kind::Success, "done".into(), None);
        assert!(n.mark_read());
        assert!(!n.mark_read());
        assert!(n.is_read());
    }

    #[test]
    fn kind_colors_are_distinct() {
        for (i, a) in Kind::ALL.iter().enumerate() {
            for b in &Kind::ALL[i + 1..] {
                assert_ne!(a.color(), b.color());
                assert_ne!(a.glyph(), b.glyph());
            }
        }
    }

    #[test]
    fn id_display_is_prefixed() {
        let n = Notification::new(Kind::Info, String::new(), None);
        assert_eq!(n.id().to_string(), format!("#{}", n.id().get()));
    }
}
