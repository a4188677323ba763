// SPDX-License-Identifier: MPL-2.0
//! Notification system for user feedback.
//!
//! Feature code reports the outcome of its work through a [`Notifier`].
//! Each posted notification lands in two places:
//!
//! - the [`Store`], an observable collection with read/unread tracking that
//!   backs the notification [`panel`]
//! - the [`Relay`], which shows a transient [`toast`] that expires on its own
//!
//! # Components
//!
//! - [`notification`] - `Notification` record and its `Kind`
//! - [`store`] - snapshot state, reducer and listeners
//! - [`dispatch`] - `Notifier`, the only way to create notifications
//! - [`relay`] - toast queueing and expiry
//! - [`toast`] - toast widgets
//! - [`panel`] - notification panel widget
//!
//! # Usage
//!
//! ```
//! use tryon_studio::ui::notifications::{Draft, Kind, Notifier};
//!
//! let mut notifier = Notifier::default();
//! let id = notifier.notify(Kind::Info, "Hello", None);
//! notifier.post(Draft::error("Failed to load the catalog.").with_title("Error"));
//! assert_eq!(notifier.unread_count(), 2);
//!
//! notifier.acknowledge(id);
//! assert_eq!(notifier.unread_count(), 1);
//! ```

pub mod dispatch;
pub mod notification;
pub mod panel;
pub mod relay;
pub mod store;
pub mod toast;

pub use dispatch::{Draft, Notifier, Posted};
pub use notification::{Kind, Notification, NotificationId};
pub use relay::{Message as ToastMessage, Relay, Toast, ToastKey, ToastSettings};
pub use store::{Listener, ListenerId, State, Store};
