// SPDX-License-Identifier: MPL-2.0
//! Request and response bodies of the try-on service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog id meaning "no garment selected".
pub const NO_SELECTION: &str = "0";

/// A garment listed by `GET /api/catalog`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    /// Image path relative to the service root.
    pub image: String,
    /// `default` for bundled items, `user` for uploads.
    #[serde(rename = "type", default)]
    pub origin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub shirts: Vec<CatalogItem>,
    #[serde(default)]
    pub pants: Vec<CatalogItem>,
}

impl Catalog {
    /// Appends an uploaded item to the matching collection.
    pub fn insert(&mut self, garment: GarmentType, item: CatalogItem) {
        match garment {
            GarmentType::Shirt => self.shirts.push(item),
            GarmentType::Pant => self.pants.push(item),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shirts.is_empty() && self.pants.is_empty()
    }
}

/// Collection a garment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentType {
    #[default]
    Shirt,
    Pant,
}

impl GarmentType {
    pub const ALL: [GarmentType; 2] = [GarmentType::Shirt, GarmentType::Pant];

    /// Form value sent to the upload endpoint.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            GarmentType::Shirt => "shirt",
            GarmentType::Pant => "pant",
        }
    }

    /// Item name used when the user leaves the name field empty.
    #[must_use]
    pub fn fallback_name(self) -> &'static str {
        match self {
            GarmentType::Shirt => "Custom Shirt",
            GarmentType::Pant => "Custom Pant",
        }
    }
}

impl fmt::Display for GarmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/catalog/upload`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UploadResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub item: Option<CatalogItem>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A successfully uploaded garment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedItem {
    /// Confirmation sent by the backend, if any.
    pub message: Option<String>,
    pub item: CatalogItem,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TryOnRequest<'a> {
    pub shirt: &'a str,
    pub pant: &'a str,
    pub use_camera: bool,
}

/// Body of `POST /api/tryon`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TryOnResponse {
    pub success: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub redirect: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Result of a try-on request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TryOnOutcome {
    /// The service rendered an image.
    Image(String),
    /// The try-on continues in the camera view at this URL.
    Redirect(String),
}

/// Body of `POST /api/skin-tone-analysis`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SkinToneResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub analysis: Option<SkinToneAnalysis>,
}

/// Skin tone classification returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinToneAnalysis {
    pub tone: String,
    /// Dominant skin colors as hex strings.
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recommended_colors: Vec<String>,
    #[serde(default)]
    pub report_image: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub progress: u32,
    pub total: u32,
    #[serde(default)]
    pub reward: u32,
}

impl Achievement {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.progress >= self.total
    }

    /// Completion ratio in `0.0..=1.0`.
    #[must_use]
    pub fn ratio(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        (self.progress as f32 / self.total as f32).clamp(0.0, 1.0)
    }
}

/// Body of `GET /api/rewards/status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardsStatus {
    pub tokens: u64,
    #[serde(default)]
    pub level: u32,
    /// Progress towards the next level, `0..=100`.
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

/// Body of `POST /api/rewards/update`.
///
/// The flat contract only carries `tokens` and `progress`; the enveloped form
/// returns the full rewards record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RewardsUpdate {
    pub tokens: u64,
    pub progress: u32,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub achievements: Option<Vec<Achievement>>,
}

impl RewardsStatus {
    /// Folds an update response into the dashboard state.
    pub fn apply(&mut self, update: RewardsUpdate) {
        self.tokens = update.tokens;
        self.progress = update.progress.min(100);
        if let Some(level) = update.level {
            self.level = level;
        }
        if let Some(achievements) = update.achievements {
            self.achievements = achievements;
        }
    }
}

/// Action that earns tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardAction {
    TryOn,
    Share,
}

impl RewardAction {
    pub const ALL: [RewardAction; 2] = [RewardAction::TryOn, RewardAction::Share];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RewardAction::TryOn => "try_on",
            RewardAction::Share => "share",
        }
    }

    /// Human-readable form (`try_on` becomes `try on`).
    #[must_use]
    pub fn label(self) -> String {
        self.as_str().replace('_', " ")
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RewardsUpdateRequest {
    pub action: RewardAction,
}

/// Rewards bodies come either flat or wrapped as `{success, data, error}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum Envelope<T> {
    Wrapped {
        success: bool,
        data: Option<T>,
        #[serde(default)]
        error: Option<String>,
    },
    Flat(T),
}

/// Error body shape shared by every endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_item_reads_type_field() {
        let item: CatalogItem = serde_json::from_str(
            r#"{"id":"1","name":"Blue Tee","image":"/static/assets/shirt1.png","type":"default"}"#,
        )
        .expect("parse");
        assert_eq!(item.origin, "default");
    }

    #[test]
    fn catalog_tolerates_missing_collections() {
        let catalog: Catalog = serde_json::from_str(r#"{"shirts":[]}"#).expect("parse");
        assert!(catalog.is_empty());
    }

    #[test]
    fn envelope_accepts_flat_body() {
        let body: Envelope<RewardsStatus> =
            serde_json::from_str(r#"{"tokens":340,"level":2,"progress":65,"achievements":[]}"#)
                .expect("parse");
        assert!(matches!(body, Envelope::Flat(status) if status.tokens == 340));
    }

    #[test]
    fn envelope_accepts_wrapped_body() {
        let body: Envelope<RewardsStatus> = serde_json::from_str(
            r#"{"success":true,"data":{"tokens":345,"level":2,"progress":70,"achievements":[]}}"#,
        )
        .expect("parse");
        assert!(matches!(
            body,
            Envelope::Wrapped { success: true, data: Some(status), .. } if status.tokens == 345
        ));
    }

    #[test]
    fn envelope_accepts_wrapped_failure() {
        let body: Envelope<RewardsUpdate> =
            serde_json::from_str(r#"{"success":false,"error":"boom"}"#).expect("parse");
        assert!(matches!(
            body,
            Envelope::Wrapped { success: false, data: None, error: Some(e) } if e == "boom"
        ));
    }

    #[test]
    fn skin_tone_reads_camel_case_fields() {
        let body: SkinToneResponse = serde_json::from_str(
            r##"{"success":true,"tone":"Medium","season":"Autumn","colors":["#a0522d"],
                "description":"Warm","recommendedColors":["#ffffff"],"reportImage":"/r.png"}"##,
        )
        .expect("parse");
        let analysis = body.analysis.expect("analysis");
        assert_eq!(analysis.recommended_colors, vec!["#ffffff".to_string()]);
        assert_eq!(analysis.report_image.as_deref(), Some("/r.png"));
    }

    #[test]
    fn achievement_completion() {
        let mut achievement = Achievement {
            title: "Fashion Explorer".into(),
            description: String::new(),
            progress: 7,
            total: 10,
            reward: 50,
        };
        assert!(!achievement.is_complete());
        assert!((achievement.ratio() - 0.7).abs() < f32::EPSILON);
        achievement.progress = 10;
        assert!(achievement.is_complete());
    }

    #[test]
    fn rewards_update_overrides_optional_fields() {
        let mut status = RewardsStatus {
            tokens: 1,
            level: 2,
            progress: 3,
            achievements: Vec::new(),
        };
        status.apply(RewardsUpdate {
            tokens: 6,
            progress: 8,
            level: None,
            achievements: None,
        });
        assert_eq!((status.tokens, status.level, status.progress), (6, 2, 8));
    }

    #[test]
    fn reward_action_labels() {
        assert_eq!(RewardAction::TryOn.label(), "try on");
        assert_eq!(
            serde_json::to_string(&RewardsUpdateRequest {
                action: RewardAction::TryOn
            })
            .expect("serialize"),
            r#"{"action":"try_on"}"#
        );
    }
}
