// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens and the
//! notification system.
//!
//! The `App` struct wires together the backend client, localization, the
//! notifier and the three screens, and routes every message through a single
//! update entrypoint.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::backend::Client;
use crate::config::{self, Config};
use crate::diagnostics::{AppStateEvent, DiagnosticsCollector};
use crate::i18n::fluent::I18n;
use crate::ui::catalog;
use crate::ui::notifications::{Draft, Notifier, State as NotificationState, ToastSettings};
use crate::ui::rewards;
use crate::ui::studio;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    config: Config,
    client: Client,
    notifier: Notifier,
    diagnostics: DiagnosticsCollector,
    /// Where diagnostics are written when the window closes.
    diagnostics_path: Option<PathBuf>,
    /// Whether the notification panel is open.
    panel_open: bool,
    rewards: rewards::State,
    catalog: catalog::State,
    studio: studio::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("panel_open", &self.panel_open)
            .field("unread", &self.notifier.unread_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 540;
pub const MIN_WINDOW_WIDTH: u32 = 760;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // Close requests go through `update` so diagnostics can be written.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::from_config(Config::default(), None)
    }
}

impl App {
    /// Builds the application from an already loaded configuration.
    fn from_config(config: Config, lang: Option<String>) -> Self {
        let i18n = I18n::new(lang, &config);
        let mut notifier = Notifier::new(ToastSettings::from_config(&config.notifications));
        let diagnostics = DiagnosticsCollector::default();
        notifier.set_diagnostics(diagnostics.handle());

        let handle = diagnostics.handle();
        let mut last_unread = 0;
        notifier.subscribe(Box::new(move |state: &Arc<NotificationState>| {
            let count = state.unread_count();
            if count != last_unread {
                last_unread = count;
                handle.log_state(AppStateEvent::UnreadCountChanged { count });
            }
        }));

        let base_url = config.backend.base_url();
        let client = match Client::new(&config.backend) {
            Ok(client) => client,
            Err(err) => {
                tracing::error!(error = %err, "falling back to a default HTTP client");
                Client::fallback(base_url)
            }
        };

        Self {
            i18n,
            screen: Screen::default(),
            theme_mode: config.general.theme_mode,
            config,
            client,
            notifier,
            diagnostics,
            diagnostics_path: None,
            panel_open: false,
            rewards: rewards::State::default(),
            catalog: catalog::State::default(),
            studio: studio::State::default(),
        }
    }

    /// Initializes application state and kicks off the first rewards fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (mut config, config_warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));
        if let Some(url) = flags.backend_url {
            config.backend.base_url = Some(url);
        }

        let mut app = Self::from_config(config, flags.lang);
        app.diagnostics_path = flags.diagnostics;
        tracing::info!(
            backend = app.client.base_url(),
            locale = %app.i18n.current_locale(),
            "starting"
        );

        if let Some(key) = config_warning {
            app.notifier.post(
                Draft::warning(app.i18n.tr(&key))
                    .with_title(app.i18n.tr("notification-config-title")),
            );
        }

        let task = app.update(Message::Rewards(rewards::Message::Refresh));
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.notifier.unread_count() {
            0 => app_name,
            unread => format!("({unread}) {app_name}"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick_sub = subscription::create_tick_subscription(self.notifier.toasts().has_toasts());
        let rewards_sub = subscription::create_rewards_subscription(
            self.screen,
            self.config.backend.rewards_poll_interval(),
        );

        let window_sub = subscription::create_window_subscription();

        Subscription::batch([tick_sub, rewards_sub, window_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = update::handle(self, message);
        self.diagnostics.process_pending();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            notifier: &self.notifier,
            panel_open: self.panel_open,
            now: chrono::Utc::now(),
            rewards: &self.rewards,
            catalog: &self.catalog,
            studio: &self.studio,
        })
    }
}
