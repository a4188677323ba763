// SPDX-License-Identifier: MPL-2.0
//! Try-on studio: garment selection and skin tone analysis.

use crate::backend::{
    is_supported_image, Catalog, CatalogItem, Client, ImageFile, SkinToneAnalysis, TryOnOutcome,
    NO_SELECTION,
};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::catalog::pick_image;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::notifications::{Draft, Notifier};
use crate::ui::styles;
use iced::widget::{button, container, pick_list, scrollable, text, Column, Container, Row};
use iced::{Color, Element, Length, Task};
use std::fmt;
use std::path::PathBuf;

pub struct UpdateContext<'a> {
    pub notifier: &'a mut Notifier,
    pub client: &'a Client,
    pub i18n: &'a I18n,
}

/// One entry of a garment pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub id: String,
    pub name: String,
}

impl Choice {
    fn none(label: String) -> Self {
        Self {
            id: NO_SELECTION.to_string(),
            name: label,
        }
    }

    fn from_item(item: &CatalogItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    ShirtSelected(Choice),
    PantSelected(Choice),
    TryOn,
    TriedOn(Result<TryOnOutcome, Error>),
    PickSkinImage,
    SkinImagePicked(Option<PathBuf>),
    Analyze,
    Analyzed(Result<SkinToneAnalysis, Error>),
}

#[derive(Debug)]
pub struct State {
    shirt: String,
    pant: String,
    trying: bool,
    outcome: Option<TryOnOutcome>,
    skin_image: Option<PathBuf>,
    analyzing: bool,
    analysis: Option<SkinToneAnalysis>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            shirt: NO_SELECTION.to_string(),
            pant: NO_SELECTION.to_string(),
            trying: false,
            outcome: None,
            skin_image: None,
            analyzing: false,
            analysis: None,
        }
    }
}

impl State {
    /// Selected shirt id, `"0"` when none.
    #[must_use]
    pub fn shirt(&self) -> &str {
        &self.shirt
    }

    #[must_use]
    pub fn pant(&self) -> &str {
        &self.pant
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&TryOnOutcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn skin_image(&self) -> Option<&PathBuf> {
        self.skin_image.as_ref()
    }

    #[must_use]
    pub fn analysis(&self) -> Option<&SkinToneAnalysis> {
        self.analysis.as_ref()
    }

    fn has_selection(&self) -> bool {
        self.shirt != NO_SELECTION || self.pant != NO_SELECTION
    }

    pub fn update(&mut self, message: Message, ctx: UpdateContext<'_>) -> Task<Message> {
        let i18n = ctx.i18n;
        match message {
            Message::ShirtSelected(choice) => {
                self.shirt = choice.id;
                Task::none()
            }
            Message::PantSelected(choice) => {
                self.pant = choice.id;
                Task::none()
            }
            Message::TryOn => {
                if self.trying {
                    return Task::none();
                }
                if !self.has_selection() {
                    ctx.notifier.post(
                        Draft::error(i18n.tr("studio-selection-required"))
                            .with_title(i18n.tr("studio-selection-required-title")),
                    );
                    return Task::none();
                }
                self.trying = true;
                let client = ctx.client.clone();
                let (shirt, pant) = (self.shirt.clone(), self.pant.clone());
                Task::perform(
                    async move { client.try_on(&shirt, &pant).await },
                    Message::TriedOn,
                )
            }
            Message::TriedOn(Ok(outcome)) => {
                self.trying = false;
                match &outcome {
                    TryOnOutcome::Redirect(url) => ctx.notifier.post(
                        Draft::info(
                            i18n.tr_with_args("studio-camera-redirect", &[("url", url.as_str())]),
                        )
                        .with_title(i18n.tr("studio-camera-redirect-title")),
                    ),
                    TryOnOutcome::Image(_) => ctx.notifier.post(
                        Draft::success(i18n.tr("studio-tryon-complete"))
                            .with_title(i18n.tr("studio-tryon-complete-title")),
                    ),
                };
                self.outcome = Some(outcome);
                Task::none()
            }
            Message::TriedOn(Err(err)) => {
                self.trying = false;
                tracing::warn!(error = %err, "try-on failed");
                let message = err
                    .backend_detail()
                    .map_or_else(|| i18n.tr("studio-tryon-failed"), str::to_string);
                ctx.notifier.post(
                    Draft::error(message).with_title(i18n.tr("notification-error-title")),
                );
                Task::none()
            }
            Message::PickSkinImage => {
                Task::perform(pick_image(i18n.tr("studio-pick-title")), Message::SkinImagePicked)
            }
            Message::SkinImagePicked(Some(path)) => {
                if is_supported_image(&path) {
                    self.skin_image = Some(path);
                    self.analysis = None;
                } else {
                    ctx.notifier.error(i18n.tr("studio-invalid-image"));
                }
                Task::none()
            }
            Message::SkinImagePicked(None) => Task::none(),
            Message::Analyze => {
                if self.analyzing {
                    return Task::none();
                }
                let Some(path) = self.skin_image.clone() else {
                    ctx.notifier.error(i18n.tr("studio-missing-image"));
                    return Task::none();
                };
                self.analyzing = true;
                let client = ctx.client.clone();
                Task::perform(
                    async move {
                        let image = ImageFile::read(&path).await?;
                        client.analyze_skin_tone(image).await
                    },
                    Message::Analyzed,
                )
            }
            Message::Analyzed(Ok(analysis)) => {
                self.analyzing = false;
                tracing::info!(tone = %analysis.tone, "skin tone analyzed");
                self.analysis = Some(analysis);
                ctx.notifier.success(i18n.tr("studio-analysis-complete"));
                Task::none()
            }
            Message::Analyzed(Err(err)) => {
                self.analyzing = false;
                let message = err
                    .backend_detail()
                    .map_or_else(|| i18n.tr("studio-analysis-failed"), str::to_string);
                tracing::warn!(error = %err, "skin tone analysis failed");
                ctx.notifier.error(message);
                Task::none()
            }
        }
    }

    pub fn view<'a>(&'a self, catalog: &'a Catalog, i18n: &'a I18n) -> Element<'a, Message> {
        let content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(text(i18n.tr("studio-title")).size(typography::TITLE_LG))
            .push(self.try_on_section(catalog, i18n))
            .push(self.skin_tone_section(i18n));

        scrollable(content).into()
    }

    fn try_on_section<'a>(&'a self, catalog: &'a Catalog, i18n: &'a I18n) -> Element<'a, Message> {
        let shirts = choices(&catalog.shirts, i18n);
        let pants = choices(&catalog.pants, i18n);
        let shirt = shirts.iter().find(|c| c.id == self.shirt).cloned();
        let pant = pants.iter().find(|c| c.id == self.pant).cloned();

        let selectors = Row::new()
            .spacing(spacing::MD)
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(text(i18n.tr("studio-shirt")).size(typography::CAPTION))
                    .push(pick_list(shirts, shirt, Message::ShirtSelected)),
            )
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(text(i18n.tr("studio-pant")).size(typography::CAPTION))
                    .push(pick_list(pants, pant, Message::PantSelected)),
            );

        let label = if self.trying {
            i18n.tr("studio-trying")
        } else {
            i18n.tr("studio-try-on")
        };
        let submit = button(text(label).size(typography::BODY))
            .on_press_maybe((!self.trying).then_some(Message::TryOn))
            .height(sizing::BUTTON_HEIGHT)
            .style(styles::button::primary);

        let mut column = Column::new()
            .spacing(spacing::SM)
            .push(text(i18n.tr("studio-tryon-title")).size(typography::TITLE_MD))
            .push(selectors)
            .push(submit);

        if let Some(outcome) = &self.outcome {
            let url = match outcome {
                TryOnOutcome::Image(url) | TryOnOutcome::Redirect(url) => url.as_str(),
            };
            column = column.push(
                text(i18n.tr_with_args("studio-result-link", &[("url", url)]))
                    .size(typography::CAPTION),
            );
        }

        Container::new(column)
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::card)
            .into()
    }

    fn skin_tone_section<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let photo = self
            .skin_image
            .as_deref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| i18n.tr("studio-no-photo"));

        let analyze_label = if self.analyzing {
            i18n.tr("studio-analyzing")
        } else {
            i18n.tr("studio-analyze")
        };

        let controls = Row::new()
            .spacing(spacing::SM)
            .push(
                button(text(i18n.tr("studio-choose-photo")).size(typography::BODY))
                    .on_press(Message::PickSkinImage)
                    .style(styles::button::unselected),
            )
            .push(text(photo).size(typography::BODY))
            .push(
                button(text(analyze_label).size(typography::BODY))
                    .on_press_maybe((!self.analyzing).then_some(Message::Analyze))
                    .style(styles::button::primary),
            );

        let mut column = Column::new()
            .spacing(spacing::SM)
            .push(text(i18n.tr("studio-skin-title")).size(typography::TITLE_MD))
            .push(controls);

        if let Some(analysis) = &self.analysis {
            column = column.push(analysis_view(analysis, i18n));
        }

        Container::new(column)
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::card)
            .into()
    }
}

fn choices(items: &[CatalogItem], i18n: &I18n) -> Vec<Choice> {
    std::iter::once(Choice::none(i18n.tr("studio-none")))
        .chain(items.iter().map(Choice::from_item))
        .collect()
}

fn analysis_view<'a>(analysis: &'a SkinToneAnalysis, i18n: &'a I18n) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(
            text(i18n.tr_with_args("studio-skin-tone", &[("tone", analysis.tone.as_str())]))
                .size(typography::TITLE_SM),
        );

    if let Some(season) = &analysis.season {
        column = column.push(
            text(i18n.tr_with_args("studio-season", &[("season", season.as_str())]))
                .size(typography::BODY),
        );
    }
    if !analysis.description.is_empty() {
        column = column.push(text(analysis.description.as_str()).size(typography::BODY));
    }

    column = column.push(swatches(&analysis.colors));
    if !analysis.recommended_colors.is_empty() {
        column = column
            .push(text(i18n.tr("studio-recommended")).size(typography::CAPTION))
            .push(swatches(&analysis.recommended_colors));
    }
    if let Some(report) = &analysis.report_image {
        column = column.push(
            text(i18n.tr_with_args("studio-report", &[("url", report.as_str())]))
                .size(typography::CAPTION),
        );
    }

    column.into()
}

/// Parses a `#rrggbb` swatch; unparsable entries are skipped.
fn swatch_color(hex: &str) -> Option<Color> {
    hex.trim().parse::<Color>().ok()
}

fn swatches(colors: &[String]) -> Element<'_, Message> {
    colors
        .iter()
        .filter_map(|hex| swatch_color(hex).map(|color| (hex, color)))
        .fold(Row::new().spacing(spacing::XS), |row, (hex, color)| {
            row.push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(
                        Container::new(text(""))
                            .width(sizing::ICON_LG)
                            .height(sizing::ICON_LG)
                            .style(move |_theme| container::Style {
                                background: Some(color.into()),
                                border: iced::Border {
                                    radius: radius::SM.into(),
                                    ..Default::default()
                                },
                                ..Default::default()
                            }),
                    )
                    .push(text(hex.as_str()).size(typography::CAPTION)),
            )
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Kind;
    use std::time::Duration;

    struct Harness {
        state: State,
        notifier: Notifier,
        client: Client,
        i18n: I18n,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                state: State::default(),
                notifier: Notifier::default(),
                client: Client::with_base_url("http://127.0.0.1:9", Duration::from_secs(1))
                    .expect("client"),
                i18n: I18n::new(Some("en-US".to_string()), &crate::config::Config::default()),
            }
        }

        fn send(&mut self, message: Message) {
            let _ = self.state.update(
                message,
                UpdateContext {
                    notifier: &mut self.notifier,
                    client: &self.client,
                    i18n: &self.i18n,
                },
            );
        }

        fn latest(&self) -> (Kind, Option<String>, String) {
            let snapshot = self.notifier.snapshot();
            let latest = snapshot.latest().expect("notification");
            (
                latest.kind(),
                latest.title().map(str::to_string),
                latest.message().to_string(),
            )
        }
    }

    fn choice(id: &str) -> Choice {
        Choice {
            id: id.to_string(),
            name: format!("item {id}"),
        }
    }

    #[test]
    fn try_on_without_selection_requires_an_item() {
        let mut harness = Harness::new();
        harness.send(Message::TryOn);

        let (kind, title, message) = harness.latest();
        assert_eq!(kind, Kind::Error);
        assert_eq!(title.as_deref(), Some("Selection required"));
        assert_eq!(message, "Please select at least one item to try on");
    }

    #[test]
    fn selecting_garments_stores_ids() {
        let mut harness = Harness::new();
        harness.send(Message::ShirtSelected(choice("2")));
        harness.send(Message::PantSelected(choice("0")));
        assert_eq!(harness.state.shirt(), "2");
        assert_eq!(harness.state.pant(), NO_SELECTION);
        assert!(harness.state.has_selection());
    }

    #[test]
    fn redirect_posts_camera_info() {
        let mut harness = Harness::new();
        harness.send(Message::TriedOn(Ok(TryOnOutcome::Redirect(
            "http://localhost:5000/api/predict?shirt=1&pant=0".into(),
        ))));

        let (kind, title, message) = harness.latest();
        assert_eq!(kind, Kind::Info);
        assert_eq!(title.as_deref(), Some("Camera try-on"));
        assert!(message.contains("/api/predict?shirt=1&pant=0"));
    }

    #[test]
    fn generated_image_posts_success() {
        let mut harness = Harness::new();
        harness.send(Message::TriedOn(Ok(TryOnOutcome::Image(
            "http://localhost:5000/static/result.png".into(),
        ))));

        let (kind, title, message) = harness.latest();
        assert_eq!(kind, Kind::Success);
        assert_eq!(title.as_deref(), Some("Try-on complete"));
        assert_eq!(message, "Your virtual try-on has been generated successfully");
        assert!(harness.state.outcome().is_some());
    }

    #[test]
    fn unsupported_skin_image_is_rejected() {
        let mut harness = Harness::new();
        harness.send(Message::SkinImagePicked(Some(PathBuf::from("/tmp/selfie.gif"))));

        assert!(harness.state.skin_image().is_none());
        let (kind, title, message) = harness.latest();
        assert_eq!(kind, Kind::Error);
        assert_eq!(title, None);
        assert_eq!(message, "Please upload an image file.");
    }

    #[test]
    fn analyze_without_image_asks_for_one() {
        let mut harness = Harness::new();
        harness.send(Message::Analyze);
        assert_eq!(harness.latest().2, "Please upload an image first.");
    }

    #[test]
    fn analysis_failure_prefers_backend_message() {
        let mut harness = Harness::new();
        harness.send(Message::Analyzed(Err(Error::Backend("No face detected".into()))));
        assert_eq!(harness.latest().2, "No face detected");

        harness.send(Message::Analyzed(Err(Error::Http("timeout".into()))));
        assert_eq!(harness.latest().2, "Failed to analyze skin tone");
    }

    #[test]
    fn analysis_rejected_without_reason_is_localized() {
        let mut harness = Harness::new();
        harness.i18n = I18n::new(Some("fr".to_string()), &crate::config::Config::default());
        harness.send(Message::Analyzed(Err(Error::Rejected(
            "/api/skin-tone-analysis".into(),
        ))));
        let expected = harness.i18n.tr("studio-analysis-failed");
        assert_eq!(harness.latest().2, expected);
        assert_ne!(expected, "Failed to analyze skin tone");
    }

    #[test]
    fn try_on_failure_without_reason_is_localized() {
        let mut harness = Harness::new();
        harness.send(Message::TriedOn(Err(Error::Rejected("/api/tryon".into()))));
        let (kind, title, message) = harness.latest();
        assert_eq!(kind, Kind::Error);
        assert_eq!(title.as_deref(), Some("Error"));
        assert_eq!(message, "The try-on could not be generated. Please try again.");
    }

    #[test]
    fn swatch_colors_parse_hex_and_skip_garbage() {
        assert_eq!(
            swatch_color("#ff0000"),
            Some(Color::from_rgb8(0xff, 0x00, 0x00))
        );
        assert_eq!(swatch_color(" #c68642 "), Some(Color::from_rgb8(0xc6, 0x86, 0x42)));
        assert_eq!(swatch_color("not a color"), None);
    }

    #[test]
    fn view_renders_try_on_result() {
        let mut harness = Harness::new();
        harness.send(Message::TriedOn(Ok(TryOnOutcome::Image(
            "http://localhost:5000/static/result.png".into(),
        ))));
        let _ = harness.state.view(&Catalog::default(), &harness.i18n);
    }

    #[test]
    fn analysis_success_is_kept_and_announced() {
        let mut harness = Harness::new();
        harness.send(Message::Analyzed(Ok(SkinToneAnalysis {
            tone: "Medium".into(),
            colors: vec!["#c68642".into()],
            description: String::new(),
            recommended_colors: Vec::new(),
            report_image: None,
            season: Some("Autumn".into()),
        })));

        assert_eq!(harness.state.analysis().map(|a| a.tone.as_str()), Some("Medium"));
        let (kind, _, message) = harness.latest();
        assert_eq!(kind, Kind::Success);
        assert_eq!(message, "Analysis complete!");
    }

    #[test]
    fn choices_start_with_none() {
        let i18n = Harness::new().i18n;
        let items = vec![CatalogItem {
            id: "1".into(),
            name: "Blue Shirt".into(),
            image: "/static/assets/shirt1.png".into(),
            origin: "default".into(),
        }];
        let list = choices(&items, &i18n);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, NO_SELECTION);
        assert_eq!(list[1].to_string(), "Blue Shirt");
    }
}
