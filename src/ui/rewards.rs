// SPDX-License-Identifier: MPL-2.0
//! Rewards dashboard.
//!
//! Shows tokens, level progress and achievements fetched from
//! `/api/rewards/status`, and lets the user earn tokens for an action.
//! Every completed achievement is announced once per session.

use crate::backend::{Achievement, Client, RewardAction, RewardsStatus, RewardsUpdate};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{Draft, Notifier};
use crate::ui::styles;
use iced::widget::{button, progress_bar, scrollable, text, Column, Container, Row, Space};
use iced::{alignment, Element, Length, Task};
use std::collections::HashSet;

/// Services the dashboard needs while handling a message.
pub struct UpdateContext<'a> {
    pub notifier: &'a mut Notifier,
    pub client: &'a Client,
    pub i18n: &'a I18n,
}

/// Messages emitted by the dashboard.
#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    Loaded(Result<RewardsStatus, Error>),
    Earn(RewardAction),
    Earned(RewardAction, Result<RewardsUpdate, Error>),
}

#[derive(Debug, Default)]
pub struct State {
    status: Option<RewardsStatus>,
    loading: bool,
    pending: Option<RewardAction>,
    /// Titles of achievements already announced this session.
    announced: HashSet<String>,
    /// Whether the previous fetch failed; repeated poll failures stay quiet.
    last_fetch_failed: bool,
}

impl State {
    #[must_use]
    pub fn status(&self) -> Option<&RewardsStatus> {
        self.status.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn update(&mut self, message: Message, ctx: UpdateContext<'_>) -> Task<Message> {
        match message {
            Message::Refresh => {
                if self.loading {
                    return Task::none();
                }
                self.loading = true;
                let client = ctx.client.clone();
                Task::perform(
                    async move { client.rewards_status().await },
                    Message::Loaded,
                )
            }
            Message::Loaded(Ok(status)) => {
                self.loading = false;
                self.last_fetch_failed = false;
                self.status = Some(status);
                self.announce_completed(ctx.notifier, ctx.i18n);
                Task::none()
            }
            Message::Loaded(Err(err)) => {
                self.loading = false;
                tracing::warn!(error = %err, "rewards status unavailable");
                if !self.last_fetch_failed {
                    ctx.notifier.post(
                        Draft::error(ctx.i18n.tr("rewards-load-error"))
                            .with_title(ctx.i18n.tr("notification-error-title")),
                    );
                }
                self.last_fetch_failed = true;
                Task::none()
            }
            Message::Earn(action) => {
                if self.pending.is_some() {
                    return Task::none();
                }
                self.pending = Some(action);
                let client = ctx.client.clone();
                Task::perform(
                    async move { client.update_rewards(action).await },
                    move |result| Message::Earned(action, result),
                )
            }
            Message::Earned(action, Ok(update)) => {
                self.pending = None;
                self.status.get_or_insert_with(RewardsStatus::default).apply(update);
                let label = action.label();
                ctx.notifier.post(
                    Draft::success(
                        ctx.i18n
                            .tr_with_args("rewards-earned-message", &[("action", label.as_str())]),
                    )
                    .with_title(ctx.i18n.tr("rewards-earned-title")),
                );
                self.announce_completed(ctx.notifier, ctx.i18n);
                Task::none()
            }
            Message::Earned(action, Err(err)) => {
                self.pending = None;
                tracing::warn!(action = action.as_str(), error = %err, "rewards update failed");
                ctx.notifier.post(
                    Draft::error(ctx.i18n.tr("rewards-update-error"))
                        .with_title(ctx.i18n.tr("notification-error-title")),
                );
                Task::none()
            }
        }
    }

    /// Completed achievements not announced yet; marks them as announced.
    fn take_new_completions(&mut self) -> Vec<Achievement> {
        let Some(status) = &self.status else {
            return Vec::new();
        };
        status
            .achievements
            .iter()
            .filter(|achievement| achievement.is_complete())
            .filter(|achievement| self.announced.insert(achievement.title.clone()))
            .cloned()
            .collect()
    }

    fn announce_completed(&mut self, notifier: &mut Notifier, i18n: &I18n) {
        for achievement in self.take_new_completions() {
            let reward = achievement.reward.to_string();
            notifier.post(
                Draft::success(i18n.tr_with_args(
                    "achievement-unlocked-message",
                    &[
                        ("title", achievement.title.as_str()),
                        ("reward", reward.as_str()),
                    ],
                ))
                .with_title(i18n.tr("achievement-unlocked-title")),
            );
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = text(i18n.tr("rewards-title")).size(typography::TITLE_LG);

        let Some(status) = &self.status else {
            let placeholder = if self.loading {
                i18n.tr("rewards-loading")
            } else {
                i18n.tr("rewards-unavailable")
            };
            let refresh = button(text(i18n.tr("rewards-refresh")))
                .on_press_maybe((!self.loading).then_some(Message::Refresh))
                .style(styles::button::primary);
            return Column::new()
                .spacing(spacing::MD)
                .padding(spacing::LG)
                .push(title)
                .push(text(placeholder).size(typography::BODY))
                .push(refresh)
                .into();
        };

        let tokens = status.tokens.to_string();
        let level = status.level.to_string();
        let progress = status.progress.min(100).to_string();

        let summary = Container::new(
            Column::new()
                .spacing(spacing::XS)
                .push(
                    text(i18n.tr_with_args("rewards-tokens", &[("tokens", tokens.as_str())]))
                        .size(typography::TITLE_MD),
                )
                .push(
                    Row::new()
                        .push(
                            text(i18n.tr_with_args("rewards-level", &[("level", level.as_str())]))
                                .size(typography::BODY),
                        )
                        .push(Space::new().width(Length::Fill))
                        .push(
                            text(i18n.tr_with_args(
                                "rewards-level-progress",
                                &[("progress", progress.as_str())],
                            ))
                            .size(typography::CAPTION),
                        ),
                )
                .push(progress_bar(0.0..=100.0, status.progress.min(100) as f32)),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card);

        let actions = RewardAction::ALL.iter().fold(
            Row::new().spacing(spacing::SM),
            |row, &action| {
                let key = match action {
                    RewardAction::TryOn => "rewards-earn-try-on",
                    RewardAction::Share => "rewards-earn-share",
                };
                row.push(
                    button(text(i18n.tr(key)).size(typography::BODY))
                        .on_press_maybe(self.pending.is_none().then_some(Message::Earn(action)))
                        .height(sizing::BUTTON_HEIGHT)
                        .style(styles::button::primary),
                )
            },
        );

        let achievements = status.achievements.iter().fold(
            Column::new().spacing(spacing::SM),
            |column, achievement| column.push(achievement_card(achievement, i18n)),
        );

        let content = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(title)
            .push(summary)
            .push(actions)
            .push(text(i18n.tr("rewards-achievements")).size(typography::TITLE_MD))
            .push(achievements);

        scrollable(content).into()
    }
}

fn achievement_card<'a>(achievement: &'a Achievement, i18n: &'a I18n) -> Element<'a, Message> {
    let count = format!("{}/{}", achievement.progress.min(achievement.total), achievement.total);
    let reward = achievement.reward.to_string();

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(text(achievement.title.as_str()).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(
            text(i18n.tr_with_args("rewards-achievement-reward", &[("reward", reward.as_str())]))
                .size(typography::CAPTION),
        );

    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(header)
            .push(text(achievement.description.as_str()).size(typography::BODY))
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(alignment::Vertical::Center)
                    .push(progress_bar(0.0..=1.0, achievement.ratio()))
                    .push(text(count).size(typography::CAPTION)),
            ),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn achievement(title: &str, progress: u32, total: u32) -> Achievement {
        Achievement {
            title: title.to_string(),
            description: String::new(),
            progress,
            total,
            reward: 50,
        }
    }

    fn status(achievements: Vec<Achievement>) -> RewardsStatus {
        RewardsStatus {
            tokens: 340,
            level: 2,
            progress: 65,
            achievements,
        }
    }

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &crate::config::Config::default())
    }

    fn client() -> Client {
        Client::with_base_url("http://127.0.0.1:9", Duration::from_secs(1)).expect("client")
    }

    #[test]
    fn completed_achievements_are_announced_once() {
        let mut state = State::default();
        let mut notifier = Notifier::default();
        let client = client();
        let i18n = english();

        for _ in 0..2 {
            let _ = state.update(
                Message::Loaded(Ok(status(vec![
                    achievement("Fashion Explorer", 10, 10),
                    achievement("Social Butterfly", 3, 5),
                ]))),
                UpdateContext {
                    notifier: &mut notifier,
                    client: &client,
                    i18n: &i18n,
                },
            );
        }

        let snapshot = notifier.snapshot();
        assert_eq!(snapshot.len(), 1);
        let latest = snapshot.latest().expect("announcement");
        assert_eq!(latest.title(), Some("Achievement Unlocked!"));
        assert!(latest.message().contains("Fashion Explorer"));
        assert!(latest.message().contains("50"));
    }

    #[test]
    fn repeated_load_failures_notify_once() {
        let mut state = State::default();
        let mut notifier = Notifier::default();
        let client = client();
        let i18n = english();

        for _ in 0..3 {
            let _ = state.update(
                Message::Loaded(Err(Error::Http("connection refused".into()))),
                UpdateContext {
                    notifier: &mut notifier,
                    client: &client,
                    i18n: &i18n,
                },
            );
        }

        assert_eq!(notifier.snapshot().len(), 1);
        assert_eq!(
            notifier.snapshot().latest().map(|n| n.message().to_string()),
            Some("Failed to load rewards data. Please try again later.".to_string())
        );
    }

    #[test]
    fn earned_tokens_update_status_and_notify() {
        let mut state = State::default();
        let mut notifier = Notifier::default();
        let client = client();
        let i18n = english();

        let _ = state.update(
            Message::Earned(
                RewardAction::TryOn,
                Ok(RewardsUpdate {
                    tokens: 345,
                    progress: 68,
                    level: None,
                    achievements: None,
                }),
            ),
            UpdateContext {
                notifier: &mut notifier,
                client: &client,
                i18n: &i18n,
            },
        );

        assert_eq!(state.status().map(|s| s.tokens), Some(345));
        let snapshot = notifier.snapshot();
        let latest = snapshot.latest().expect("notification");
        assert_eq!(latest.title(), Some("Tokens Earned"));
        assert_eq!(latest.message(), "You've earned tokens for try on!");
    }

    #[test]
    fn failed_update_posts_error() {
        let mut state = State::default();
        let mut notifier = Notifier::default();
        let client = client();
        let i18n = english();

        let _ = state.update(
            Message::Earned(RewardAction::Share, Err(Error::Backend("nope".into()))),
            UpdateContext {
                notifier: &mut notifier,
                client: &client,
                i18n: &i18n,
            },
        );

        let snapshot = notifier.snapshot();
        let latest = snapshot.latest().expect("notification");
        assert_eq!(latest.kind(), crate::ui::notifications::Kind::Error);
        assert_eq!(latest.message(), "Failed to update rewards. Please try again.");
    }
}
