// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar with screen tabs and the notification bell.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Container, Row, Space};
use iced::{alignment, Element, Length};

/// Unread counts above this are shown as "99+".
const BADGE_CAP: usize = 99;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub unread_count: usize,
    pub panel_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Open(Screen),
    ToggleNotifications,
}

/// Text shown in the bell badge, or `None` when nothing is unread.
#[must_use]
pub fn badge_label(unread_count: usize) -> Option<String> {
    match unread_count {
        0 => None,
        n if n > BADGE_CAP => Some(format!("{BADGE_CAP}+")),
        n => Some(n.to_string()),
    }
}

/// Render the navbar.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let tabs = Screen::ALL.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, &screen| {
            let style = if screen == ctx.screen {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row.push(
                button(text(ctx.i18n.tr(screen.label_key())).size(typography::BODY))
                    .on_press(Message::Open(screen))
                    .height(sizing::BUTTON_HEIGHT)
                    .style(style),
            )
        },
    );

    let mut bell_content = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(text("🔔").size(sizing::ICON_MD));
    if let Some(label) = badge_label(ctx.unread_count) {
        bell_content = bell_content.push(
            Container::new(text(label).size(typography::CAPTION))
                .padding([0.0, spacing::XXS])
                .style(styles::container::badge),
        );
    }

    let bell_style = if ctx.panel_open {
        styles::button::selected
    } else {
        styles::button::unselected
    };
    let bell = button(bell_content)
        .on_press(Message::ToggleNotifications)
        .height(sizing::BUTTON_HEIGHT)
        .style(bell_style);

    let bar = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(text(ctx.i18n.tr("app-name")).size(typography::TITLE_MD))
        .push(tabs)
        .push(Space::new().width(Length::Fill))
        .push(bell);

    Container::new(bar)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(container::bordered_box)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_hidden_without_unread() {
        assert_eq!(badge_label(0), None);
    }

    #[test]
    fn badge_caps_large_counts() {
        assert_eq!(badge_label(7).as_deref(), Some("7"));
        assert_eq!(badge_label(99).as_deref(), Some("99"));
        assert_eq!(badge_label(150).as_deref(), Some("99+"));
    }

    #[test]
    fn view_builds_for_every_screen() {
        let i18n = I18n::default();
        for screen in Screen::ALL {
            let _ = view(ViewContext {
                i18n: &i18n,
                screen,
                unread_count: 3,
                panel_open: false,
            });
        }
    }
}
