// SPDX-License-Identifier: MPL-2.0
//! Catalog browser and garment upload form.

use crate::backend::{
    Catalog, CatalogItem, Client, GarmentType, ImageFile, UploadedItem, SUPPORTED_IMAGE_EXTENSIONS,
};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{Draft, Notifier};
use crate::ui::styles;
use iced::widget::{button, pick_list, scrollable, text, text_input, Column, Container, Row};
use iced::{Element, Length, Task};
use std::path::{Path, PathBuf};

/// Services the catalog needs while handling a message.
pub struct UpdateContext<'a> {
    pub notifier: &'a mut Notifier,
    pub client: &'a Client,
    pub i18n: &'a I18n,
}

/// Messages emitted by the catalog screen.
#[derive(Debug, Clone)]
pub enum Message {
    Load,
    Loaded(Result<Catalog, Error>),
    PickFile,
    FilePicked(Option<PathBuf>),
    GarmentSelected(GarmentType),
    NameChanged(String),
    Upload,
    Uploaded(GarmentType, Result<UploadedItem, Error>),
}

/// Upload form fields.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<PathBuf>,
    pub garment: GarmentType,
    pub name: String,
    pub uploading: bool,
}

#[derive(Debug, Default)]
pub struct State {
    catalog: Catalog,
    loaded: bool,
    loading: bool,
    form: UploadForm,
}

/// Opens the native image picker.
pub(crate) async fn pick_image(title: String) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title(title)
        .add_filter("Images", &SUPPORTED_IMAGE_EXTENSIONS[..])
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Default item name for a picked file: its stem.
#[must_use]
pub fn name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl State {
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Whether the catalog has been fetched at least once.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn form(&self) -> &UploadForm {
        &self.form
    }

    pub fn update(&mut self, message: Message, ctx: UpdateContext<'_>) -> Task<Message> {
        match message {
            Message::Load => {
                if self.loading {
                    return Task::none();
                }
                self.loading = true;
                let client = ctx.client.clone();
                Task::perform(async move { client.catalog().await }, Message::Loaded)
            }
            Message::Loaded(Ok(catalog)) => {
                self.loading = false;
                self.loaded = true;
                tracing::debug!(
                    shirts = catalog.shirts.len(),
                    pants = catalog.pants.len(),
                    "catalog loaded"
                );
                self.catalog = catalog;
                Task::none()
            }
            Message::Loaded(Err(err)) => {
                self.loading = false;
                tracing::warn!(error = %err, "catalog unavailable");
                ctx.notifier.post(
                    Draft::error(ctx.i18n.tr("catalog-load-error"))
                        .with_title(ctx.i18n.tr("notification-error-title")),
                );
                Task::none()
            }
            Message::PickFile => {
                Task::perform(pick_image(ctx.i18n.tr("catalog-pick-title")), Message::FilePicked)
            }
            Message::FilePicked(Some(path)) => {
                if self.form.name.trim().is_empty() {
                    self.form.name = name_from_path(&path);
                }
                self.form.file = Some(path);
                Task::none()
            }
            Message::FilePicked(None) => Task::none(),
            Message::GarmentSelected(garment) => {
                self.form.garment = garment;
                Task::none()
            }
            Message::NameChanged(name) => {
                self.form.name = name;
                Task::none()
            }
            Message::Upload => {
                if self.form.uploading {
                    return Task::none();
                }
                let Some(path) = self.form.file.clone() else {
                    ctx.notifier.post(
                        Draft::error(ctx.i18n.tr("catalog-missing-file"))
                            .with_title(ctx.i18n.tr("catalog-missing-file-title")),
                    );
                    return Task::none();
                };
                self.form.uploading = true;
                let garment = self.form.garment;
                let name = self.form.name.clone();
                let client = ctx.client.clone();
                Task::perform(
                    async move {
                        let image = ImageFile::read(&path).await?;
                        client.upload_catalog_item(image, garment, &name).await
                    },
                    move |result| Message::Uploaded(garment, result),
                )
            }
            Message::Uploaded(garment, Ok(uploaded)) => {
                self.form = UploadForm {
                    garment,
                    ..UploadForm::default()
                };
                let message = uploaded.message.unwrap_or_else(|| {
                    ctx.i18n
                        .tr_with_args("catalog-upload-success", &[("name", uploaded.item.name.as_str())])
                });
                self.catalog.insert(garment, uploaded.item);
                ctx.notifier.post(
                    Draft::success(message).with_title(ctx.i18n.tr("catalog-upload-success-title")),
                );
                Task::none()
            }
            Message::Uploaded(_, Err(err)) => {
                self.form.uploading = false;
                tracing::warn!(error = %err, "garment upload failed");
                let message = err
                    .backend_detail()
                    .map_or_else(|| ctx.i18n.tr("catalog-upload-failed"), str::to_string);
                ctx.notifier.post(
                    Draft::error(message).with_title(ctx.i18n.tr("catalog-upload-failed-title")),
                );
                Task::none()
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = text(i18n.tr("catalog-title")).size(typography::TITLE_LG);

        let listing: Element<'a, Message> = if self.loading && !self.loaded {
            text(i18n.tr("catalog-loading")).size(typography::BODY).into()
        } else if self.catalog.is_empty() {
            text(i18n.tr("catalog-empty")).size(typography::BODY).into()
        } else {
            Column::new()
                .spacing(spacing::MD)
                .push(section(i18n.tr("catalog-shirts"), &self.catalog.shirts))
                .push(section(i18n.tr("catalog-pants"), &self.catalog.pants))
                .into()
        };

        let content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(title)
            .push(self.upload_form(i18n))
            .push(listing);

        scrollable(content).into()
    }

    fn upload_form<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let form = &self.form;
        let file_label = form
            .file
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| i18n.tr("catalog-no-file"));

        let picker = Row::new()
            .spacing(spacing::SM)
            .push(
                button(text(i18n.tr("catalog-choose-file")).size(typography::BODY))
                    .on_press(Message::PickFile)
                    .style(styles::button::unselected),
            )
            .push(text(file_label).size(typography::BODY));

        let garment = pick_list(
            &GarmentType::ALL[..],
            Some(form.garment),
            Message::GarmentSelected,
        );

        let name = text_input(
            &i18n.tr("catalog-name-placeholder"),
            &form.name,
        )
        .on_input(Message::NameChanged);

        let submit_label = if form.uploading {
            i18n.tr("catalog-uploading")
        } else {
            i18n.tr("catalog-upload")
        };
        let submit = button(text(submit_label).size(typography::BODY))
            .on_press_maybe((!form.uploading).then_some(Message::Upload))
            .height(sizing::BUTTON_HEIGHT)
            .style(styles::button::primary);

        Container::new(
            Column::new()
                .spacing(spacing::SM)
                .push(text(i18n.tr("catalog-upload-title")).size(typography::TITLE_MD))
                .push(picker)
                .push(garment)
                .push(name)
                .push(submit),
        )
        .padding(spacing::MD)
        .max_width(sizing::FORM_WIDTH)
        .style(styles::container::card)
        .into()
    }
}

fn section<'a>(heading: String, items: &'a [CatalogItem]) -> Element<'a, Message> {
    let cards = items.iter().fold(Row::new().spacing(spacing::SM), |row, item| {
        row.push(
            Container::new(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(text(item.name.as_str()).size(typography::TITLE_SM))
                    .push(text(format!("#{} · {}", item.id, item.origin)).size(typography::CAPTION)),
            )
            .padding(spacing::SM)
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .style(styles::container::card),
        )
    });

    Column::new()
        .spacing(spacing::XS)
        .push(text(heading).size(typography::TITLE_MD))
        .push(scrollable(cards).direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::default(),
        )))
        .into()
}
