// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting in-session activity.
//!
//! Events are captured during application usage, stored in a memory-bounded
//! circular buffer, and can be exported as JSON for bug reports (the
//! `--diagnostics <FILE>` flag writes them when the window closes).
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event with a [`DiagnosticEventKind`]
//! - [`DiagnosticsHandle`]: Cheap, cloneable, non-blocking sender
//! - [`DiagnosticsCollector`]: Owner of the buffer, drains the channel

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    AppStateEvent, DiagnosticEvent, DiagnosticEventKind, ReportedEvent, UserAction,
};
