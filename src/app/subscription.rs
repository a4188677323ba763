// SPDX-License-Identifier: MPL-2.0
//! Time and window-event subscriptions for the application.

use super::{Message, Screen};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Toast expiry granularity.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Ticks only while toasts are on screen or queued.
pub fn create_tick_subscription(has_toasts: bool) -> Subscription<Message> {
    if has_toasts {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Routes window close requests so the session can be wrapped up first.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        _ => None,
    })
}

/// Polls the rewards status while the dashboard is shown.
pub fn create_rewards_subscription(screen: Screen, interval: Duration) -> Subscription<Message> {
    if screen == Screen::Rewards {
        time::every(interval).map(|_| Message::PollRewards)
    } else {
        Subscription::none()
    }
}
