// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The active screen sits below the navbar; the notification panel and the
//! toast column are stacked over it.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::catalog;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{panel, toast, Notifier};
use crate::ui::rewards;
use crate::ui::studio;
use crate::ui::styles;
use chrono::{DateTime, Utc};
use iced::widget::{mouse_area, opaque, Column, Container, Row, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub notifier: &'a Notifier,
    pub panel_open: bool,
    pub now: DateTime<Utc>,
    pub rewards: &'a rewards::State,
    pub catalog: &'a catalog::State,
    pub studio: &'a studio::State,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Rewards => ctx.rewards.view(ctx.i18n).map(Message::Rewards),
        Screen::Catalog => ctx.catalog.view(ctx.i18n).map(Message::Catalog),
        Screen::Studio => ctx
            .studio
            .view(ctx.catalog.catalog(), ctx.i18n)
            .map(Message::Studio),
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        screen: ctx.screen,
        unread_count: ctx.notifier.unread_count(),
        panel_open: ctx.panel_open,
    })
    .map(Message::Navbar);

    let base = Column::new()
        .push(navbar_view)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if ctx.panel_open {
        layers = layers.push(view_panel(&ctx));
    }

    layers
        .push(toast::overlay(ctx.notifier.toasts()).map(Message::Toast))
        .into()
}

fn view_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let backdrop = mouse_area(
        Container::new(Column::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::Panel(panel::Message::Close));

    let panel_view = panel::view(panel::ViewContext {
        i18n: ctx.i18n,
        state: ctx.notifier.state(),
        now: ctx.now,
    })
    .map(Message::Panel);

    Row::new()
        .push(backdrop)
        .push(opaque(panel_view))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
