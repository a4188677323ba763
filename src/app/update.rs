// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Screen messages are forwarded to their component with an update context
//! borrowing the shared notifier and client. User actions are recorded in
//! diagnostics before being handled.

use super::{App, Message, Screen};
use crate::diagnostics::{AppStateEvent, UserAction};
use crate::ui::catalog;
use crate::ui::navbar;
use crate::ui::notifications::panel::{self, Event as PanelEvent};
use crate::ui::rewards;
use crate::ui::studio;
use iced::Task;

/// Routes a top-level message.
pub(super) fn handle(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(msg) => handle_navbar(app, msg),
        Message::Panel(msg) => {
            handle_panel(app, msg);
            Task::none()
        }
        Message::Toast(msg) => {
            app.notifier.toasts_mut().handle_message(&msg);
            Task::none()
        }
        Message::Tick(now) => {
            app.notifier.toasts_mut().tick_at(now);
            Task::none()
        }
        Message::PollRewards => {
            if app.screen == Screen::Rewards {
                handle_rewards(app, rewards::Message::Refresh)
            } else {
                Task::none()
            }
        }
        Message::WindowCloseRequested(_) => handle_close(app),
        Message::Rewards(msg) => handle_rewards(app, msg),
        Message::Catalog(msg) => handle_catalog(app, msg),
        Message::Studio(msg) => handle_studio(app, msg),
    }
}

fn handle_navbar(app: &mut App, message: navbar::Message) -> Task<Message> {
    match message {
        navbar::Message::Open(screen) => {
            app.diagnostics.handle().log_action(UserAction::OpenScreen {
                screen: screen.as_str().to_string(),
            });
            app.screen = screen;
            match screen {
                Screen::Rewards => handle_rewards(app, rewards::Message::Refresh),
                Screen::Catalog => handle_catalog(app, catalog::Message::Load),
                // Garment pickers need the catalog.
                Screen::Studio if !app.catalog.is_loaded() => {
                    handle_catalog(app, catalog::Message::Load)
                }
                Screen::Studio => Task::none(),
            }
        }
        navbar::Message::ToggleNotifications => {
            app.diagnostics.handle().log_action(UserAction::TogglePanel);
            app.panel_open = !app.panel_open;
            Task::none()
        }
    }
}

fn handle_panel(app: &mut App, message: panel::Message) {
    let action = match message {
        panel::Message::Close => UserAction::TogglePanel,
        panel::Message::Acknowledge(_) => UserAction::AcknowledgeNotification,
        panel::Message::AcknowledgeAll => UserAction::AcknowledgeAll,
        panel::Message::Dismiss(_) => UserAction::DismissNotification,
        panel::Message::ClearAll => UserAction::ClearNotifications,
    };
    app.diagnostics.handle().log_action(action);

    if panel::apply(&mut app.notifier, message) == PanelEvent::Close {
        app.panel_open = false;
    }
}

fn handle_rewards(app: &mut App, message: rewards::Message) -> Task<Message> {
    match &message {
        rewards::Message::Earn(action) => {
            app.diagnostics.handle().log_action(UserAction::RewardAction {
                action: action.as_str().to_string(),
            });
        }
        rewards::Message::Loaded(Err(_)) => backend_unavailable(app, "/api/rewards/status"),
        _ => {}
    }

    app.rewards
        .update(
            message,
            rewards::UpdateContext {
                notifier: &mut app.notifier,
                client: &app.client,
                i18n: &app.i18n,
            },
        )
        .map(Message::Rewards)
}

fn handle_catalog(app: &mut App, message: catalog::Message) -> Task<Message> {
    match &message {
        catalog::Message::Upload => {
            app.diagnostics.handle().log_action(UserAction::UploadGarment);
        }
        catalog::Message::Loaded(Err(_)) => backend_unavailable(app, "/api/catalog"),
        _ => {}
    }

    app.catalog
        .update(
            message,
            catalog::UpdateContext {
                notifier: &mut app.notifier,
                client: &app.client,
                i18n: &app.i18n,
            },
        )
        .map(Message::Catalog)
}

fn handle_studio(app: &mut App, message: studio::Message) -> Task<Message> {
    match &message {
        studio::Message::TryOn => app.diagnostics.handle().log_action(UserAction::RequestTryOn),
        studio::Message::Analyze => {
            app.diagnostics.handle().log_action(UserAction::AnalyzeSkinTone);
        }
        _ => {}
    }

    app.studio
        .update(
            message,
            studio::UpdateContext {
                notifier: &mut app.notifier,
                client: &app.client,
                i18n: &app.i18n,
            },
        )
        .map(Message::Studio)
}

fn handle_close(app: &mut App) -> Task<Message> {
    if let Some(path) = &app.diagnostics_path {
        app.diagnostics.process_pending();
        match app.diagnostics.export_to_file(path) {
            Ok(()) => tracing::info!(
                path = %path.display(),
                events = app.diagnostics.len(),
                "diagnostics written"
            ),
            Err(err) => tracing::error!(path = %path.display(), error = %err, "cannot write diagnostics"),
        }
    }
    iced::exit()
}

fn backend_unavailable(app: &App, endpoint: &str) {
    app.diagnostics
        .handle()
        .log_state(AppStateEvent::BackendUnavailable {
            endpoint: endpoint.to_string(),
        });
}
