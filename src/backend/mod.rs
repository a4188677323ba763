// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the try-on service.
//!
//! Every method maps transport failures, non-2xx statuses and
//! `success: false` bodies to [`Error`], so callers only have to turn the
//! error into an error notification.

pub mod types;

pub use types::{
    Achievement, Catalog, CatalogItem, GarmentType, RewardAction, RewardsStatus, RewardsUpdate,
    SkinToneAnalysis, TryOnOutcome, UploadedItem, NO_SELECTION,
};

use crate::config::BackendConfig;
use crate::error::{Error, Result};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;
use types::{
    Envelope, ErrorBody, RewardsUpdateRequest, SkinToneResponse, TryOnRequest, TryOnResponse,
    UploadResponse,
};

/// Image extensions accepted by the upload and analysis endpoints.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Returns true if `path` has a JPG, JPEG or PNG extension (case-insensitive).
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// An image file read into memory, ready to be sent as a multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// Reads an image from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for unsupported extensions and
    /// [`Error::Io`] when the file cannot be read.
    pub async fn read(path: &Path) -> Result<Self> {
        if !is_supported_image(path) {
            return Err(Error::InvalidInput(format!(
                "unsupported image type: {}",
                path.display()
            )));
        }
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image.jpg".to_string());
        Ok(Self { file_name, bytes })
    }

    fn mime(&self) -> &'static str {
        if self.file_name.to_ascii_lowercase().ends_with(".png") {
            "image/png"
        } else {
            "image/jpeg"
        }
    }

    fn into_part(self) -> Result<Part> {
        let mime = self.mime();
        Ok(Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(mime)?)
    }
}

/// Client for the `/api/...` endpoints.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Builds a client from the `[backend]` settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the TLS backend cannot be initialized.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        Self::with_base_url(config.base_url(), config.request_timeout())
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tryon_studio/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Client with reqwest defaults (no timeout), for when the tuned builder fails.
    #[must_use]
    pub fn fallback(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves a service-relative path (`/static/...`) against the base URL.
    #[must_use]
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    /// `GET /api/catalog`
    pub async fn catalog(&self) -> Result<Catalog> {
        let response = self.http.get(self.resolve("/api/catalog")).send().await?;
        decode(response, "/api/catalog").await
    }

    /// `POST /api/catalog/upload`
    pub async fn upload_catalog_item(
        &self,
        image: ImageFile,
        garment: GarmentType,
        name: &str,
    ) -> Result<UploadedItem> {
        let name = match name.trim() {
            "" => garment.fallback_name(),
            trimmed => trimmed,
        };
        let form = Form::new()
            .part("file", image.into_part()?)
            .text("type", garment.as_str())
            .text("name", name.to_string());

        let response = self
            .http
            .post(self.resolve("/api/catalog/upload"))
            .multipart(form)
            .send()
            .await?;
        let body: UploadResponse = decode(response, "/api/catalog/upload").await?;

        match body {
            UploadResponse {
                success: true,
                item: Some(item),
                message,
                ..
            } => Ok(UploadedItem {
                message: message.filter(|m| !m.trim().is_empty()),
                item,
            }),
            UploadResponse { error, .. } => Err(backend_failure(error, "/api/catalog/upload")),
        }
    }

    /// `POST /api/tryon`
    pub async fn try_on(&self, shirt: &str, pant: &str) -> Result<TryOnOutcome> {
        let request = TryOnRequest {
            shirt,
            pant,
            use_camera: true,
        };
        let response = self
            .http
            .post(self.resolve("/api/tryon"))
            .json(&request)
            .send()
            .await?;
        let body: TryOnResponse = decode(response, "/api/tryon").await?;

        if !body.success {
            return Err(backend_failure(body.error, "/api/tryon"));
        }
        match (body.redirect, body.url, body.image_url) {
            (true, Some(url), _) => Ok(TryOnOutcome::Redirect(self.resolve(&url))),
            (_, _, Some(image)) => Ok(TryOnOutcome::Image(self.resolve(&image))),
            _ => {
                tracing::warn!("try-on response has neither an image nor a redirect");
                Err(Error::Rejected("/api/tryon".to_string()))
            }
        }
    }

    /// `POST /api/skin-tone-analysis`
    pub async fn analyze_skin_tone(&self, image: ImageFile) -> Result<SkinToneAnalysis> {
        let form = Form::new().part("image", image.into_part()?);
        let response = self
            .http
            .post(self.resolve("/api/skin-tone-analysis"))
            .multipart(form)
            .send()
            .await?;
        let body: SkinToneResponse = decode(response, "/api/skin-tone-analysis").await?;

        match body {
            SkinToneResponse {
                success: true,
                analysis: Some(mut analysis),
                ..
            } => {
                if let Some(report) = analysis.report_image.take() {
                    analysis.report_image = Some(self.resolve(&report));
                }
                Ok(analysis)
            }
            SkinToneResponse { error, .. } => {
                Err(backend_failure(error, "/api/skin-tone-analysis"))
            }
        }
    }

    /// `GET /api/rewards/status`
    pub async fn rewards_status(&self) -> Result<RewardsStatus> {
        let response = self
            .http
            .get(self.resolve("/api/rewards/status"))
            .send()
            .await?;
        unwrap_envelope(decode(response, "/api/rewards/status").await?, "/api/rewards/status")
    }

    /// `POST /api/rewards/update`
    pub async fn update_rewards(&self, action: RewardAction) -> Result<RewardsUpdate> {
        let response = self
            .http
            .post(self.resolve("/api/rewards/update"))
            .json(&RewardsUpdateRequest { action })
            .send()
            .await?;
        unwrap_envelope(decode(response, "/api/rewards/update").await?, "/api/rewards/update")
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response, endpoint: &str) -> Result<T> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        let detail = serde_json::from_slice::<ErrorBody>(&bytes)
            .ok()
            .and_then(|body| body.error);
        tracing::warn!(endpoint, %status, ?detail, "backend request failed");
        return Err(match detail {
            Some(message) => Error::Backend(message),
            None => Error::Http(format!("{endpoint} returned {status}")),
        });
    }

    serde_json::from_slice(&bytes).map_err(|err| {
        tracing::warn!(endpoint, error = %err, "undecodable backend response");
        Error::Rejected(endpoint.to_string())
    })
}

fn unwrap_envelope<T>(body: Envelope<T>, endpoint: &str) -> Result<T> {
    match body {
        Envelope::Flat(value)
        | Envelope::Wrapped {
            success: true,
            data: Some(value),
            ..
        } => Ok(value),
        Envelope::Wrapped { error, .. } => Err(backend_failure(error, endpoint)),
    }
}

/// Keeps the backend's own message; a missing or blank one becomes
/// [`Error::Rejected`] so the screen can word it.
fn backend_failure(error: Option<String>, endpoint: &str) -> Error {
    match error.filter(|message| !message.trim().is_empty()) {
        Some(message) => Error::Backend(message),
        None => Error::Rejected(endpoint.to_string()),
    }
}
