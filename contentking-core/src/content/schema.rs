// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed records for each registered content type
//!
//! Field names follow the CMS schema. Fields the schema marks as required
//! are plain values, so an entry missing them fails to decode with
//! [`ContentError::SchemaMismatch`] instead of rendering blanks.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::bundled;
use super::error::ContentError;
use super::types::{ContentType, Entry};

/// Locale assumed for records that do not report one
pub const DEFAULT_LOCALE: &str = "en-us";

/// A record type bound to one content type
pub trait ContentRecord:
    DeserializeOwned + Serialize + Clone + Default + Send + Sync + 'static
{
    /// Content type the record is decoded from
    const CONTENT_TYPE: ContentType;

    /// Entry uid (empty for bundled fallback records)
    fn uid(&self) -> &str;

    /// Entry locale
    fn locale(&self) -> &str;

    /// Bundled records shown when the CMS has nothing
    fn fallback() -> Vec<Self>;

    /// Single bundled record, for single-entry lookups
    fn fallback_entry() -> Self {
        Self::fallback().into_iter().next().unwrap_or_default()
    }

    /// Decode a raw entry
    fn from_entry(entry: &Entry) -> Result<Self, ContentError> {
        if entry.content_type() != Self::CONTENT_TYPE {
            return Err(ContentError::SchemaMismatch {
                content_type: Self::CONTENT_TYPE,
                reason: format!("entry belongs to {}", entry.content_type()),
            });
        }
        serde_json::from_value(Value::Object(entry.fields().clone())).map_err(|e| {
            ContentError::SchemaMismatch {
                content_type: Self::CONTENT_TYPE,
                reason: e.to_string(),
            }
        })
    }
}

macro_rules! content_record {
    ($record:ty, $content_type:expr, $fallback:path) => {
        impl ContentRecord for $record {
            const CONTENT_TYPE: ContentType = $content_type;

            fn uid(&self) -> &str {
                &self.uid
            }

            fn locale(&self) -> &str {
                self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
            }

            fn fallback() -> Vec<Self> {
                $fallback()
            }
        }
    };
}

/// Uploaded asset reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Public URL
    pub url: String,
    /// Asset title (used as alt text)
    #[serde(default)]
    pub title: String,
}

/// Link with display text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallToAction {
    /// Button text
    #[serde(default)]
    pub text: String,
    /// Target URL
    #[serde(default)]
    pub url: String,
    /// Open outside the site
    #[serde(default)]
    pub is_external: bool,
}

impl CallToAction {
    /// Internal link
    pub fn new(text: &str, url: &str) -> Self {
        Self {
            text: text.to_string(),
            url: url.to_string(),
            is_external: false,
        }
    }

    /// Link leaving the site
    pub fn external(text: &str, url: &str) -> Self {
        Self {
            is_external: true,
            ..Self::new(text, url)
        }
    }

    /// Whether there is anything to render
    pub fn is_present(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// Label + URL pair used in menus and footers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkItem {
    /// Link label
    pub label: String,
    /// Target URL
    pub url: String,
}

impl LinkItem {
    /// Create a link item
    pub fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
        }
    }
}

/// Site-wide social profile links
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub twitter_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
}

/// `global_settings` record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub locale: Option<String>,
    pub site_title: String,
    #[serde(default)]
    pub site_logo: Option<Asset>,
    #[serde(default)]
    pub site_tagline: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub social_links: Option<SocialLinks>,
}

/// Plain navigation link
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleLink {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub is_external: bool,
}

/// Entry of a dropdown menu
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DropdownItem {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Dropdown menu in the header
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DropdownMenu {
    pub label: String,
    #[serde(default)]
    pub dropdown_items: Vec<DropdownItem>,
}

/// One header navigation item; at most one of the two is set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    #[serde(default)]
    pub simple_link: Option<SimpleLink>,
    #[serde(default)]
    pub dropdown_menu: Option<DropdownMenu>,
}

/// Header call-to-action buttons
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CtaButtons {
    #[serde(default)]
    pub primary_cta: Option<CallToAction>,
    #[serde(default)]
    pub secondary_cta: Option<CallToAction>,
}

/// `navigation` record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Navigation {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub navigation_name: String,
    pub navigation_items: Vec<NavigationItem>,
    #[serde(default)]
    pub cta_buttons: Option<CtaButtons>,
}

/// `hero_section_v2` record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroSection {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub locale: Option<String>,
    pub hero_title: String,
    #[serde(default)]
    pub hero_subtitle: Option<String>,
    pub hero_description: String,
    #[serde(default)]
    pub page_slug: String,
    #[serde(default)]
    pub hero_image: Option<Asset>,
    pub primary_cta: CallToAction,
    #[serde(default)]
    pub secondary_cta: Option<CallToAction>,
    #[serde(default)]
    pub background_style: Option<String>,
    #[serde(default)]
    pub layout_style: Option<String>,
}

/// `feature_card` record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCard {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub locale: Option<String>,
    pub feature_title: String,
    pub feature_description: String,
    pub feature_icon: String,
    #[serde(default)]
    pub feature_order: i64,
    #[serde(default)]
    pub feature_category: String,
    #[serde(default)]
    pub feature_url: Option<String>,
}

/// `core_product` record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreProduct {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub locale: Option<String>,
    pub product_title: String,
    pub product_description: String,
    pub product_icon: String,
    /// Comma-separated feature list
    #[serde(default)]
    pub product_features: String,
    #[serde(default)]
    pub product_order: i64,
    #[serde(default)]
    pub product_url: Option<String>,
}

/// `statistic` record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub locale: Option<String>,
    pub stat_label: String,
    pub stat_value: String,
    #[serde(default)]
    pub stat_suffix: Option<String>,
    pub stat_description: String,
    #[serde(default)]
    pub stat_order: i64,
    #[serde(default)]
    pub stat_category: String,
}

/// `role_card` record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleCard {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub locale: Option<String>,
    pub role_title: String,
    pub role_description: String,
    pub role_icon: String,
    /// Comma-separated benefit list
    #[serde(default)]
    pub role_benefits: String,
    #[serde(default)]
    pub role_order: i64,
}

/// `value_card` record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueCard {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub locale: Option<String>,
    pub value_title: String,
    pub value_description: String,
    pub value_icon: String,
    #[serde(default)]
    pub value_order: i64,
}

/// Team member profile links
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberLinks {
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub twitter_url: Option<String>,
}

/// `team_member` record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub locale: Option<String>,
    pub member_name: String,
    pub member_role: String,
    #[serde(default)]
    pub member_department: Option<String>,
    #[serde(default)]
    pub member_bio: Option<String>,
    #[serde(default)]
    pub member_photo: Option<Asset>,
    #[serde(default)]
    pub member_order: i64,
    #[serde(default)]
    pub social_links: Option<MemberLinks>,
}

/// `job_opening` record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobOpening {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub locale: Option<String>,
    pub job_title: String,
    pub department: String,
    pub location: String,
    pub job_type: String,
    #[serde(default)]
    pub experience_level: String,
    pub job_description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub benefits: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub application_url: Option<String>,
    #[serde(default)]
    pub job_order: Option<i64>,
}

/// Titled group of footer links
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkSection {
    pub title: String,
    #[serde(default)]
    pub links: Vec<LinkItem>,
}

/// The three footer link columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterSections {
    pub company_section: LinkSection,
    pub products_section: LinkSection,
    pub resources_section: LinkSection,
}

/// Copyright line and legal links
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterBottom {
    pub copyright_text: String,
    #[serde(default)]
    pub legal_links: Vec<LinkItem>,
}

/// `footer` record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub locale: Option<String>,
    pub footer_sections: FooterSections,
    pub footer_bottom: FooterBottom,
}

content_record!(GlobalSettings, ContentType::GlobalSettings, bundled::global_settings);
content_record!(Navigation, ContentType::Navigation, bundled::navigation);
content_record!(HeroSection, ContentType::HeroSection, bundled::hero_sections);
content_record!(FeatureCard, ContentType::FeatureCard, bundled::feature_cards);
content_record!(CoreProduct, ContentType::CoreProduct, bundled::core_products);
content_record!(Statistic, ContentType::Statistic, bundled::statistics);
content_record!(RoleCard, ContentType::RoleCard, bundled::role_cards);
content_record!(ValueCard, ContentType::ValueCard, bundled::value_cards);
content_record!(TeamMember, ContentType::TeamMember, bundled::team_members);
content_record!(JobOpening, ContentType::JobOpening, bundled::job_openings);
content_record!(Footer, ContentType::Footer, bundled::footer);

/// Split a comma-separated CMS list field into trimmed items
pub fn split_list(field: &str) -> Vec<&str> {
    field
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}
