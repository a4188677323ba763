// SPDX-License-Identifier: MPL-2.0
//! The notification dispatch API.
//!
//! [`Notifier`] is the only entry point feature code uses to create,
//! acknowledge and remove notifications. Posting fans a [`Posted`] event out
//! to two independent subscribers: the [`Store`] (persistent panel) and the
//! [`Relay`] (transient toasts).

use super::notification::{Kind, Notification, NotificationId};
use super::relay::{Relay, ToastSettings};
use super::store::{Action, Listener, ListenerId, State, Store};
use crate::diagnostics::{DiagnosticsHandle, ReportedEvent};
use std::sync::Arc;

/// Domain event emitted by [`Notifier::notify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posted {
    pub kind: Kind,
    pub title: Option<String>,
    pub message: String,
}

/// A notification waiting to be posted.
///
/// ```
/// use tryon_studio::ui::notifications::{Draft, Kind};
///
/// let draft = Draft::error("Failed to update rewards. Please try again.").with_title("Error");
/// assert_eq!(draft.kind(), Kind::Error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    kind: Kind,
    message: String,
    title: Option<String>,
}

impl Draft {
    pub fn new(kind: Kind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            title: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Kind::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Kind::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Kind::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Kind::Error, message)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }
}

/// Owner of the notification store and the toast relay.
#[derive(Debug, Default)]
pub struct Notifier {
    store: Store,
    toasts: Relay,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Notifier {
    #[must_use]
    pub fn new(settings: ToastSettings) -> Self {
        Self {
            store: Store::new(),
            toasts: Relay::new(settings),
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle used to record warnings and errors.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Creates a notification, adds it to the store and shows a toast for it.
    pub fn notify(
        &mut self,
        kind: Kind,
        message: impl Into<String>,
        title: Option<String>,
    ) -> NotificationId {
        let record = Notification::new(kind, message.into(), title);
        let id = record.id();
        let posted = Posted {
            kind,
            title: record.title().map(str::to_owned),
            message: record.message().to_owned(),
        };

        self.record(id, &posted);
        self.store.dispatch(Action::Add(record));
        self.toasts.push(&posted);
        id
    }

    pub fn post(&mut self, draft: Draft) -> NotificationId {
        self.notify(draft.kind, draft.message, draft.title)
    }

    pub fn success(&mut self, message: impl Into<String>) -> NotificationId {
        self.notify(Kind::Success, message, None)
    }

    pub fn info(&mut self, message: impl Into<String>) -> NotificationId {
        self.notify(Kind::Info, message, None)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> NotificationId {
        self.notify(Kind::Warning, message, None)
    }

    pub fn error(&mut self, message: impl Into<String>) -> NotificationId {
        self.notify(Kind::Error, message, None)
    }

    /// Marks a notification as read. No-op if absent or already read.
    pub fn acknowledge(&mut self, id: NotificationId) {
        self.store.dispatch(Action::MarkRead(id));
    }

    pub fn acknowledge_all(&mut self) {
        self.store.dispatch(Action::MarkAllRead);
    }

    /// Removes a notification from the panel. No-op if absent.
    pub fn dismiss(&mut self, id: NotificationId) {
        self.store.dispatch(Action::Remove(id));
    }

    /// Empties the panel. Visible toasts are left to expire on their own.
    pub fn reset(&mut self) {
        self.store.dispatch(Action::ClearAll);
    }

    /// Current store snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<State> {
        Arc::clone(self.store.state())
    }

    /// Borrowed view of the current snapshot, for rendering.
    #[must_use]
    pub fn state(&self) -> &State {
        self.store.state()
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.store.state().unread_count()
    }

    pub fn subscribe(&mut self, listener: Listener) -> ListenerId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.store.unsubscribe(id)
    }

    #[must_use]
    pub fn toasts(&self) -> &Relay {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut Relay {
        &mut self.toasts
    }

    fn record(&self, id: NotificationId, posted: &Posted) {
        match posted.kind {
            Kind::Warning => {
                tracing::warn!(%id, title = ?posted.title, "{}", posted.message);
                if let Some(handle) = &self.diagnostics {
                    handle.log_warning(ReportedEvent::new(
                        posted.title.clone(),
                        posted.message.clone(),
                    ));
                }
            }
            Kind::Error => {
                tracing::error!(%id, title = ?posted.title, "{}", posted.message);
                if let Some(handle) = &self.diagnostics {
                    handle.log_error(ReportedEvent::new(
                        posted.title.clone(),
                        posted.message.clone(),
                    ));
                }
            }
            Kind::Success | Kind::Info => {
                tracing::debug!(%id, kind = %posted.kind, "{}", posted.message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};

    #[test]
    fn notify_feeds_store_and_relay() {
        let mut notifier = Notifier::default();
        let id = notifier.notify(Kind::Info, "Hello", Some("Greeting".into()));

        let state = notifier.snapshot();
        let latest = state.latest().expect("notification");
        assert_eq!(latest.id(), id);
        assert_eq!(latest.title(), Some("Greeting"));
        assert_eq!(notifier.toasts().visible_count(), 1);
    }

    #[test]
    fn toast_dismissal_does_not_touch_store() {
        let mut notifier = Notifier::default();
        notifier.success("saved");
        let key = notifier
            .toasts()
            .visible()
            .next()
            .map(super::super::relay::Toast::key)
            .expect("toast");

        notifier.toasts_mut().dismiss(key);
        assert_eq!(notifier.unread_count(), 1);
        assert_eq!(notifier.snapshot().len(), 1);
    }

    #[test]
    fn reset_keeps_visible_toasts() {
        let mut notifier = Notifier::default();
        notifier.info("a");
        notifier.reset();
        assert!(notifier.snapshot().is_empty());
        assert!(notifier.toasts().has_toasts());
    }

    #[test]
    fn post_uses_draft_title() {
        let mut notifier = Notifier::default();
        notifier.post(Draft::error("Failed").with_title("Error"));
        let state = notifier.snapshot();
        let latest = state.latest().expect("notification");
        assert_eq!(latest.kind(), Kind::Error);
        assert_eq!(latest.title(), Some("Error"));
    }

    #[test]
    fn warnings_and_errors_reach_diagnostics() {
        let mut collector = DiagnosticsCollector::default();
        let mut notifier = Notifier::default();
        notifier.set_diagnostics(collector.handle());

        notifier.success("ok");
        notifier.info("fyi");
        notifier.warning("careful");
        notifier.post(Draft::error("Upload failed").with_title("Upload failed"));
        collector.process_pending();

        let kinds: Vec<_> = collector.iter().map(|e| &e.kind).collect();
        assert_eq!(kinds.len(), 2);
        assert!(matches!(kinds[0], DiagnosticEventKind::Warning { event } if event.message == "careful"));
        assert!(matches!(kinds[1], DiagnosticEventKind::Error { event } if event.title.as_deref() == Some("Upload failed")));
    }
}
