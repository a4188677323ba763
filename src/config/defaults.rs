// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toasts**: Visible toast limit and per-kind display durations
//! - **Backend**: Base URL, request timeout and rewards polling interval
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default number of toasts visible at once.
pub const DEFAULT_MAX_VISIBLE_TOASTS: usize = 3;

/// Minimum number of visible toasts.
pub const MIN_MAX_VISIBLE_TOASTS: usize = 1;

/// Maximum number of visible toasts.
pub const MAX_MAX_VISIBLE_TOASTS: usize = 8;

/// Default display duration for success toasts (in seconds).
pub const DEFAULT_SUCCESS_TOAST_SECS: u32 = 4;

/// Default display duration for info toasts (in seconds).
pub const DEFAULT_INFO_TOAST_SECS: u32 = 4;

/// Default display duration for warning toasts (in seconds).
pub const DEFAULT_WARNING_TOAST_SECS: u32 = 6;

/// Default display duration for error toasts (in seconds).
pub const DEFAULT_ERROR_TOAST_SECS: u32 = 8;

/// Minimum toast duration (in seconds).
pub const MIN_TOAST_SECS: u32 = 1;

/// Maximum toast duration (in seconds).
pub const MAX_TOAST_SECS: u32 = 60;

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Default backend base URL (the try-on service's development server).
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// Default request timeout (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u32 = 10;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u32 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u32 = 120;

/// Default rewards polling interval while the dashboard is open (in seconds).
pub const DEFAULT_REWARDS_POLL_SECS: u32 = 30;

/// Minimum rewards polling interval (in seconds).
pub const MIN_REWARDS_POLL_SECS: u32 = 5;

/// Maximum rewards polling interval (in seconds).
pub const MAX_REWARDS_POLL_SECS: u32 = 600;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default capacity of the diagnostics event buffer.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_defaults_are_within_bounds() {
        for secs in [
            DEFAULT_SUCCESS_TOAST_SECS,
            DEFAULT_INFO_TOAST_SECS,
            DEFAULT_WARNING_TOAST_SECS,
            DEFAULT_ERROR_TOAST_SECS,
        ] {
            assert!((MIN_TOAST_SECS..=MAX_TOAST_SECS).contains(&secs));
        }
        assert!(
            (MIN_MAX_VISIBLE_TOASTS..=MAX_MAX_VISIBLE_TOASTS).contains(&DEFAULT_MAX_VISIBLE_TOASTS)
        );
    }

    #[test]
    fn error_toasts_stay_longest() {
        assert!(DEFAULT_ERROR_TOAST_SECS > DEFAULT_WARNING_TOAST_SECS);
        assert!(DEFAULT_WARNING_TOAST_SECS > DEFAULT_SUCCESS_TOAST_SECS);
    }

    #[test]
    fn backend_defaults_are_within_bounds() {
        assert!(
            (MIN_REQUEST_TIMEOUT_SECS..=MAX_REQUEST_TIMEOUT_SECS)
                .contains(&DEFAULT_REQUEST_TIMEOUT_SECS)
        );
        assert!(
            (MIN_REWARDS_POLL_SECS..=MAX_REWARDS_POLL_SECS).contains(&DEFAULT_REWARDS_POLL_SECS)
        );
    }
}
