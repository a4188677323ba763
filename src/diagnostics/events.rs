// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.
//!
//! This module defines the various types of events that can be captured
//! during application usage for diagnostic purposes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-initiated actions that can be captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum UserAction {
    /// Switch to another screen.
    OpenScreen { screen: String },
    /// Open or close the notification panel.
    TogglePanel,
    /// Acknowledge a single notification.
    AcknowledgeNotification,
    /// Acknowledge every notification at once.
    AcknowledgeAll,
    /// Remove a single notification from the panel.
    DismissNotification,
    /// Empty the notification panel.
    ClearNotifications,
    /// Earn tokens through a rewards action (`try_on`, `share`).
    RewardAction { action: String },
    /// Upload a garment to the catalog.
    UploadGarment,
    /// Request a virtual try-on.
    RequestTryOn,
    /// Request a skin tone analysis.
    AnalyzeSkinTone,
}

/// Application state changes worth correlating with user reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    /// Unread notification count after a store transition.
    UnreadCountChanged { count: usize },
    /// Backend became unreachable or answered with an error.
    BackendUnavailable { endpoint: String },
}

/// Warning or error surfaced to the user through a notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportedEvent {
    /// Optional notification title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Notification body.
    pub message: String,
}

impl ReportedEvent {
    #[must_use]
    pub fn new(title: Option<String>, message: impl Into<String>) -> Self {
        Self {
            title,
            message: message.into(),
        }
    }
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The type and data of the event.
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    AppState {
        state: AppStateEvent,
    },
    Warning {
        event: ReportedEvent,
    },
    Error {
        event: ReportedEvent,
    },
}
