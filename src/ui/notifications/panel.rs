// SPDX-License-Identifier: MPL-2.0
//! Notification panel.
//!
//! Renders the store snapshot (most recent first) and turns user clicks into
//! [`Message`]s. The application forwards them to the matching
//! [`Notifier`](super::Notifier) operation through [`apply`].

use super::dispatch::Notifier;
use super::notification::{Notification, NotificationId};
use super::store::State;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use chrono::{DateTime, Utc};
use chrono_humanize::HumanTime;
use iced::widget::{button, scrollable, text, Column, Container, Row, Space};
use iced::{alignment, Element, Length, Theme};

/// Contextual data needed to render the panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Reference point for relative timestamps.
    pub now: DateTime<Utc>,
}

/// Messages emitted by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Close,
    Acknowledge(NotificationId),
    AcknowledgeAll,
    Dismiss(NotificationId),
    ClearAll,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Close,
}

/// Applies a panel message to the notifier.
pub fn apply(notifier: &mut Notifier, message: Message) -> Event {
    match message {
        Message::Close => return Event::Close,
        Message::Acknowledge(id) => notifier.acknowledge(id),
        Message::AcknowledgeAll => notifier.acknowledge_all(),
        Message::Dismiss(id) => notifier.dismiss(id),
        Message::ClearAll => notifier.reset(),
    }
    Event::None
}

/// "5 minutes ago" style rendering of `created_at` relative to `now`.
#[must_use]
pub fn relative_time(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    HumanTime::from(created_at.signed_duration_since(now)).to_string()
}

/// Render the panel.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let mut title_row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(text(i18n.tr("panel-title")).size(typography::TITLE_MD));

    if state.unread_count() > 0 {
        let count = state.unread_count().to_string();
        let badge = Container::new(
            text(i18n.tr_with_args("panel-unread-badge", &[("count", count.as_str())]))
                .size(typography::CAPTION),
        )
        .padding([2.0, spacing::XS])
        .style(styles::container::badge);
        title_row = title_row.push(badge);
    }

    let close_button = button(text("✕").size(sizing::ICON_SM))
        .on_press(Message::Close)
        .style(styles::button::link);

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(title_row)
        .push(Space::new().width(Length::Fill))
        .push(close_button);

    let mut content = Column::new().spacing(spacing::SM).push(header);

    if state.is_empty() {
        content = content.push(
            Container::new(text(i18n.tr("panel-empty")).size(typography::BODY))
                .width(Length::Fill)
                .padding(spacing::LG)
                .align_x(alignment::Horizontal::Center),
        );
    } else {
        let mark_all = button(text(i18n.tr("panel-mark-all-read")).size(typography::CAPTION))
            .on_press_maybe((state.unread_count() > 0).then_some(Message::AcknowledgeAll))
            .style(styles::button::link);
        let clear_all = button(text(i18n.tr("panel-clear-all")).size(typography::CAPTION))
            .on_press(Message::ClearAll)
            .style(styles::button::link);

        content = content.push(
            Row::new()
                .spacing(spacing::XS)
                .push(mark_all)
                .push(Space::new().width(Length::Fill))
                .push(clear_all),
        );

        let rows = state
            .iter()
            .fold(Column::new().spacing(spacing::XS), |column, notification| {
                column.push(notification_row(notification, i18n, ctx.now))
            });
        content = content.push(scrollable(rows).height(Length::Fill));
    }

    Container::new(content)
        .width(Length::Fixed(sizing::PANEL_WIDTH))
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn notification_row<'a>(
    notification: &'a Notification,
    i18n: &'a I18n,
    now: DateTime<Utc>,
) -> Element<'a, Message> {
    let kind = notification.kind();
    let accent = kind.color();
    let unread = !notification.is_read();

    let icon = text(kind.glyph())
        .size(sizing::ICON_MD)
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent),
        });

    let mut body = Column::new().spacing(spacing::XXS).width(Length::Fill);
    if let Some(title) = notification.title() {
        body = body.push(text(title).size(typography::TITLE_SM));
    }
    body = body
        .push(text(notification.message()).size(typography::BODY))
        .push(
            text(relative_time(notification.created_at(), now))
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                }),
        );

    let mut actions = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Right);
    if unread {
        actions = actions.push(
            button(text(i18n.tr("panel-mark-read")).size(typography::CAPTION))
                .on_press(Message::Acknowledge(notification.id()))
                .style(styles::button::link),
        );
    }
    actions = actions.push(
        button(text(i18n.tr("panel-remove")).size(typography::CAPTION))
            .on_press(Message::Dismiss(notification.id()))
            .style(styles::button::link),
    );

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(icon)
            .push(body)
            .push(actions),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::notification_row(unread))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Kind;
    use chrono::Duration;

    #[test]
    fn relative_time_is_in_the_past() {
        let now = Utc::now();
        let label = relative_time(now - Duration::minutes(5), now);
        assert_eq!(label, "5 minutes ago");
    }

    #[test]
    fn apply_routes_messages_to_notifier() {
        let mut notifier = Notifier::default();
        let first = notifier.notify(Kind::Info, "one", None);
        let second = notifier.notify(Kind::Error, "two", None);

        assert_eq!(apply(&mut notifier, Message::Acknowledge(first)), Event::None);
        assert_eq!(notifier.unread_count(), 1);

        apply(&mut notifier, Message::Dismiss(second));
        assert_eq!(notifier.snapshot().len(), 1);

        notifier.notify(Kind::Warning, "three", None);
        apply(&mut notifier, Message::AcknowledgeAll);
        assert_eq!(notifier.unread_count(), 0);

        apply(&mut notifier, Message::ClearAll);
        assert!(notifier.snapshot().is_empty());
    }

    #[test]
    fn close_is_propagated() {
        let mut notifier = Notifier::default();
        assert_eq!(apply(&mut notifier, Message::Close), Event::Close);
    }

    #[test]
    fn view_renders_empty_and_filled_state() {
        let i18n = I18n::default();
        let mut notifier = Notifier::default();
        let empty = notifier.snapshot();
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &empty,
            now: Utc::now(),
        });

        notifier.notify(Kind::Success, "saved", Some("Done".into()));
        let filled = notifier.snapshot();
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &filled,
            now: Utc::now(),
        });
    }
}
