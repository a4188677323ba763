// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! screen owns its state, renders from a borrowed context and reports user
//! intent as messages the application routes back to it.
//!
//! # Screens
//!
//! - [`rewards`] - Tokens, level progress and achievements
//! - [`catalog`] - Garment catalog and upload form
//! - [`studio`] - Virtual try-on and skin tone analysis
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Notification store, toasts and panel
//! - [`navbar`] - Screen tabs and the notification bell
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod catalog;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod rewards;
pub mod studio;
pub mod styles;
pub mod theming;
