// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Relay` mirrors every posted notification into a transient toast. It
//! limits the number of visible toasts, queues the rest, and expires them
//! after a duration keyed off their kind. It never touches the store.

use super::dispatch::Posted;
use super::notification::Kind;
use crate::config::{NotificationsConfig, MAX_MAX_VISIBLE_TOASTS, MIN_MAX_VISIBLE_TOASTS};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Presentation-local key used to route a dismiss click to its toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastKey(u64);

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast.
    Dismiss(ToastKey),
    /// Tick for checking auto-dismiss timers.
    Tick(Instant),
}

/// A transient acknowledgement of a posted notification.
#[derive(Debug, Clone)]
pub struct Toast {
    key: ToastKey,
    kind: Kind,
    title: Option<String>,
    message: String,
    /// When the toast became visible; `None` while queued.
    shown_at: Option<Instant>,
}

impl Toast {
    #[must_use]
    pub fn key(&self) -> ToastKey {
        self.key
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
}

/// Visible limit and per-kind display durations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastSettings {
    pub max_visible: usize,
    pub success: Duration,
    pub info: Duration,
    pub warning: Duration,
    pub error: Duration,
}

impl ToastSettings {
    #[must_use]
    pub fn from_config(config: &NotificationsConfig) -> Self {
        Self {
            max_visible: config.max_visible(),
            success: config.success_duration(),
            info: config.info_duration(),
            warning: config.warning_duration(),
            error: config.error_duration(),
        }
    }

    #[must_use]
    pub fn duration(&self, kind: Kind) -> Duration {
        match kind {
            Kind::Success => self.success,
            Kind::Info => self.info,
            Kind::Warning => self.warning,
            Kind::Error => self.error,
        }
    }
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self::from_config(&NotificationsConfig::default())
    }
}

/// Manages the toast queue and visible toasts.
#[derive(Debug, Default)]
pub struct Relay {
    /// Currently visible toasts, oldest first.
    visible: VecDeque<Toast>,
    /// Toasts waiting for a free slot.
    queue: VecDeque<Toast>,
    settings: ToastSettings,
    next_key: u64,
}

impl Relay {
    /// Creates a relay. `max_visible` is clamped to the configurable range so
    /// queued toasts always get a slot eventually.
    #[must_use]
    pub fn new(mut settings: ToastSettings) -> Self {
        settings.max_visible = settings
            .max_visible
            .clamp(MIN_MAX_VISIBLE_TOASTS, MAX_MAX_VISIBLE_TOASTS);
        Self {
            settings,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn settings(&self) -> &ToastSettings {
        &self.settings
    }

    /// Shows a toast for `posted`, or queues it when the visible slots are full.
    pub fn push(&mut self, posted: &Posted) -> ToastKey {
        self.push_at(posted, Instant::now())
    }

    pub(crate) fn push_at(&mut self, posted: &Posted, now: Instant) -> ToastKey {
        self.next_key += 1;
        let key = ToastKey(self.next_key);
        let mut toast = Toast {
            key,
            kind: posted.kind,
            title: posted.title.clone(),
            message: posted.message.clone(),
            shown_at: None,
        };

        if self.visible.len() < self.settings.max_visible {
            toast.shown_at = Some(now);
            self.visible.push_back(toast);
        } else {
            self.queue.push_back(toast);
        }
        key
    }

    /// Dismisses a toast, visible or queued.
    ///
    /// Returns `true` if the toast was found and removed.
    pub fn dismiss(&mut self, key: ToastKey) -> bool {
        self.dismiss_at(key, Instant::now())
    }

    fn dismiss_at(&mut self, key: ToastKey, now: Instant) -> bool {
        if let Some(pos) = self.visible.iter().position(|t| t.key == key) {
            self.visible.remove(pos);
            self.promote_from_queue(now);
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|t| t.key == key) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Expires visible toasts whose display time has elapsed at `now`.
    pub fn tick_at(&mut self, now: Instant) {
        let settings = &self.settings;
        let before = self.visible.len();
        self.visible.retain(|toast| {
            toast.shown_at.is_none_or(|shown| {
                now.saturating_duration_since(shown) < settings.duration(toast.kind)
            })
        });
        if self.visible.len() < before {
            self.promote_from_queue(now);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(key) => {
                self.dismiss(*key);
            }
            Message::Tick(now) => self.tick_at(*now),
        }
    }

    /// Returns the currently visible toasts, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any toasts (visible or queued).
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < self.settings.max_visible {
            let Some(mut toast) = self.queue.pop_front() else {
                break;
            };
            toast.shown_at = Some(now);
            self.visible.push_back(toast);
        }
    }
}
