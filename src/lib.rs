// SPDX-License-Identifier: MPL-2.0
//! `tryon_studio` is the desktop client of a virtual try-on demo, built with
//! the Iced GUI framework.
//!
//! Its core is the notification system in [`ui::notifications`]: an
//! observable store of read/unread notifications fed by a single dispatch
//! API, with transient toasts relayed alongside. The rewards, catalog and
//! studio screens talk to the try-on service through [`backend::Client`] and
//! report every outcome as a notification.

pub mod app;
pub mod backend;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod ui;
