//! Card content model.
//!
//! Everything the card displays (text, image references, contact channels,
//! gallery slides, vCard fields) lives in one [`CardConfig`]. It is parsed
//! once, validated, and then shared read-only behind an `Arc`.
//!
//! ## Loading
//!
//! ```ignore
//! use bizcard_core::CardConfig;
//!
//! // The card compiled into the binary
//! let card = CardConfig::builtin()?;
//!
//! // Or an alternative card on disk
//! let card = CardConfig::load("my-card.json")?;
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

/// The card shipped with the application.
const BUILTIN_CARD: &str = include_str!("../assets/card.json");

/// Root of the card content model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardConfig {
    pub assets: AssetsConfig,
    pub hero: HeroConfig,
    pub contact: ContactConfig,
    pub gallery: GalleryConfig,
    pub insights: InsightsConfig,
    pub closing: ClosingConfig,
    pub vcard: VCardFields,
}

/// An image reference with its accessible description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetsConfig {
    pub background_image: String,
    pub logo_image: String,
    pub profile_image: ImageRef,
}

// === Hero ===

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroConfig {
    pub badge: String,
    pub name: String,
    pub title: String,
    pub company_name: String,
    pub company_description: String,
    pub addresses: Vec<LabeledValue>,
    pub tags: Vec<Tag>,
    pub specialization: Specialization,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

/// Visual weight of a tag badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    #[default]
    Default,
    Outline,
}

/// Icons a hero tag may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagIcon {
    MapPin,
    CalendarClock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub label: String,
    #[serde(default)]
    pub variant: BadgeVariant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<TagIcon>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialization {
    pub label: String,
    pub items: Vec<SpecializationItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecializationItem {
    pub label: String,
    #[serde(default)]
    pub description: String,
}

// === Contact ===

/// Which outbound channel a contact action opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactActionKey {
    Phone,
    Email,
    Website,
}

/// Icons a contact action may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactIcon {
    Phone,
    Mail,
    Globe,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAction {
    pub key: ContactActionKey,
    pub label: String,
    pub detail: String,
    pub icon: ContactIcon,
    /// Status message shown after the action fires
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactConfig {
    pub section_label: String,
    pub actions: Vec<ContactAction>,
    /// E.164 number without the leading `+`
    pub whatsapp_number: String,
    pub whatsapp_message: String,
    pub email: EmailTemplate,
    pub website_url: String,
    pub quick_actions: QuickActionLabels,
    pub share_metadata: ShareMetadata,
    pub feedback: FeedbackTexts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailTemplate {
    pub address: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickActionLabels {
    pub download_label: String,
    pub share_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareMetadata {
    pub title: String,
    pub text: String,
    /// Public address of the card
    pub url: String,
}

/// Localizable status messages for the quick actions.
///
/// Each share outcome maps to exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackTexts {
    pub download: String,
    pub share_success: String,
    pub share_clipboard: String,
    pub share_prompt: String,
    pub share_error: String,
}

// === Gallery ===

/// One gallery image. Order in [`GalleryConfig::slides`] is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryConfig {
    pub overlay_label: String,
    pub section_title: String,
    pub slides: Vec<Slide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<CallToAction>,
}

// === Insights / closing ===

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightsConfig {
    pub company: CompanyInsights,
    pub strategy: StrategyInsights,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInsights {
    pub subtitle: String,
    pub title: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyInsights {
    pub badge: String,
    pub description: String,
    pub items: Vec<StrategyItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosingConfig {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image: ImageRef,
}

// === vCard ===

/// Identity fields exported as a vCard.
///
/// All fields are plain text. Line breaks are not escaped on export.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VCardFields {
    pub last_name: String,
    pub first_name: String,
    pub full_name: String,
    pub organization: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub url: String,
    pub address: String,
    pub note: String,
    /// Suggested file name for the exported card
    #[serde(default)]
    pub download_name: String,
}

impl CardConfig {
    /// Parse and validate the card compiled into the binary.
    pub fn builtin() -> CardResult<Self> {
        Self::from_json_str(BUILTIN_CARD)
    }

    /// Parse and validate a card from JSON text.
    pub fn from_json_str(json: &str) -> CardResult<Self> {
        let config: CardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a card from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), "Loaded card config");
        Ok(config)
    }

    /// Check the invariants the UI relies on.
    pub fn validate(&self) -> CardResult<()> {
        let name = &self.vcard.download_name;
        if name.trim().is_empty() {
            return Err(CardError::Config("vcard.downloadName is empty".into()));
        }
        if !name.to_ascii_lowercase().ends_with(".vcf") {
            return Err(CardError::Config(format!(
                "vcard.downloadName must end in .vcf: {}",
                name
            )));
        }

        require_http("contact.websiteUrl", &self.contact.website_url)?;
        require_http("contact.shareMetadata.url", &self.contact.share_metadata.url)?;
        if let Some(cta) = &self.gallery.cta {
            require_http("gallery.cta.url", &cta.url)?;
        }

        Ok(())
    }
}

fn require_http(field: &str, url: &str) -> CardResult<()> {
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        Err(CardError::Config(format!(
            "{} must be an http(s) URL: {:?}",
            field, url
        )))
    }
}
