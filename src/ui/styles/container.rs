// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Side sheet surface used by the notification panel.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(base.color)),
        border: Border {
            color: theme.extended_palette().background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        text_color: Some(base.text),
        ..Default::default()
    }
}

/// Dimmed layer behind the panel; clicking it closes the panel.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Card surface for catalog items, achievements and results.
pub fn card(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak;

    container::Style {
        background: Some(Background::Color(weak.color)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        text_color: Some(weak.text),
        ..Default::default()
    }
}

/// Row background for a notification, tinted while unread.
pub fn notification_row(unread: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let background = if unread {
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_500
            }
        } else {
            theme.extended_palette().background.base.color
        };

        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Pill badge (unread count).
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ERROR_500)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unread_rows_are_tinted() {
        let theme = Theme::Light;
        let unread = notification_row(true)(&theme);
        let read = notification_row(false)(&theme);
        assert_ne!(unread.background, read.background);
    }

    #[test]
    fn backdrop_is_translucent() {
        let style = backdrop(&Theme::Dark);
        let Some(Background::Color(color)) = style.background else {
            panic!("backdrop must have a solid color");
        };
        assert!(color.a > 0.0 && color.a < 1.0);
    }
}
