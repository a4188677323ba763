// SPDX-License-Identifier: MPL-2.0
//! Canonical notification collection and its unread counter.
//!
//! State changes go through [`Action`]s applied by a pure reducer. The store
//! keeps the current state behind an `Arc`: every dispatch produces a new
//! snapshot (copy-on-write), so a snapshot handed out earlier never changes
//! under its holder.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

/// Immutable view of the notification collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    /// Most recent first.
    notifications: VecDeque<Notification>,
    unread_count: usize,
}

impl State {
    /// Iterates notifications, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.unread_count
    }

    /// The most recently added notification.
    #[must_use]
    pub fn latest(&self) -> Option<&Notification> {
        self.notifications.front()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id() == id)
    }

    /// Counts unread records from scratch.
    #[must_use]
    pub fn recount_unread(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read()).count()
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Add(notification) => {
                if !notification.is_read() {
                    self.unread_count += 1;
                }
                self.notifications.push_front(notification);
            }
            Action::Remove(id) => {
                if let Some(pos) = self.notifications.iter().position(|n| n.id() == id) {
                    if let Some(removed) = self.notifications.remove(pos) {
                        if !removed.is_read() {
                            self.unread_count = self.unread_count.saturating_sub(1);
                        }
                    }
                }
            }
            Action::MarkRead(id) => {
                if let Some(notification) = self.notifications.iter_mut().find(|n| n.id() == id) {
                    if notification.mark_read() {
                        self.unread_count = self.unread_count.saturating_sub(1);
                    }
                }
            }
            Action::MarkAllRead => {
                for notification in &mut self.notifications {
                    notification.mark_read();
                }
                self.unread_count = 0;
            }
            Action::ClearAll => {
                self.notifications.clear();
                self.unread_count = 0;
            }
        }

        debug_assert_eq!(self.unread_count, self.recount_unread());
    }
}

/// A store transition.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
    Add(Notification),
    Remove(NotificationId),
    MarkRead(NotificationId),
    MarkAllRead,
    ClearAll,
}

/// Returns the state that results from applying `action` to `state`.
///
/// Total and deterministic; `state` is left untouched.
#[must_use]
pub(crate) fn reduce(state: &State, action: Action) -> State {
    let mut next = state.clone();
    next.apply(action);
    next
}

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Callback invoked with the new snapshot after every dispatch.
pub type Listener = Box<dyn FnMut(&Arc<State>) + Send>;

/// Single-owner holder of the current [`State`] snapshot.
#[derive(Default)]
pub struct Store {
    state: Arc<State>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> &Arc<State> {
        &self.state
    }

    pub(crate) fn dispatch(&mut self, action: Action) {
        match Arc::get_mut(&mut self.state) {
            Some(state) => state.apply(action),
            // A consumer still holds the snapshot: build the next one beside it.
            None => self.state = Arc::new(reduce(&self.state, action)),
        }
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
    }

    /// Registers a listener called after every dispatch.
    pub fn subscribe(&mut self, listener: Listener) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.push((id, listener));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
