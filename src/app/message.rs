// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::catalog;
use crate::ui::navbar;
use crate::ui::notifications::{panel, ToastMessage};
use crate::ui::rewards;
use crate::ui::studio;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Panel(panel::Message),
    Toast(ToastMessage),
    Rewards(rewards::Message),
    Catalog(catalog::Message),
    Studio(studio::Message),
    /// Periodic tick driving toast expiry.
    Tick(Instant),
    /// Rewards polling interval elapsed.
    PollRewards,
    /// The user asked to close the main window.
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TRYON_STUDIO_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Optional try-on service URL, overriding `[backend].base_url`.
    pub backend_url: Option<String>,
    /// File receiving the session's diagnostic events as JSON on exit.
    pub diagnostics: Option<PathBuf>,
}
