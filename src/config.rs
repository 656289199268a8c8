//! Site Configuration
//!
//! Branding text and behavior knobs, loaded from the embedded site.json.

use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use crate::error::LoadError;
use crate::models::Category;

const EMBEDDED_SITE: &str = include_str!("../assets/site.json");

const DEFAULT_HIGHLIGHT_SCROLL_DELAY_MS: u32 = 500;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub default_category: Category,
    /// Wait before scrolling to a highlighted item's section on page load
    pub highlight_scroll_delay_ms: u32,
    pub log_level: String,
    pub show_project_links: bool,
    pub brand: BrandConfig,
    pub hero: HeroConfig,
    pub footer: FooterConfig,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub logo: String,
    pub tagline: String,
    pub portfolio_title: String,
    pub contact_email: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub headline: Vec<String>,
    pub subheadline: String,
    pub image: String,
    pub cta_label: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub title: String,
    pub subtitle: String,
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_category: Category::default(),
            highlight_scroll_delay_ms: DEFAULT_HIGHLIGHT_SCROLL_DELAY_MS,
            log_level: "info".to_string(),
            show_project_links: false,
            brand: BrandConfig::default(),
            hero: HeroConfig::default(),
            footer: FooterConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn embedded() -> Result<Self, LoadError> {
        Self::from_json(EMBEDDED_SITE)
    }

    pub fn from_json(src: &str) -> Result<Self, LoadError> {
        serde_json::from_str(src).map_err(LoadError::Config)
    }

    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config() {
        let site = SiteConfig::embedded().unwrap();
        assert_eq!(site.default_category, Category::AppsDesign);
        assert_eq!(site.highlight_scroll_delay_ms, 500);
        assert_eq!(site.brand.contact_email, "support@waywisetech.com");
        assert_eq!(site.hero.headline.len(), 2);
        assert_eq!(site.footer.links.len(), 2);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let site = SiteConfig::from_json("{}").unwrap();
        assert_eq!(site, SiteConfig::default());
        assert_eq!(site.log_level(), LevelFilter::Info);
        assert!(!site.show_project_links);
    }

    #[test]
    fn test_partial_config() {
        let site = SiteConfig::from_json(
            r#"{"default_category": "branding", "hero": {"cta_label": "See work"}}"#,
        )
        .unwrap();
        assert_eq!(site.default_category, Category::Branding);
        assert_eq!(site.hero.cta_label, "See work");
        assert!(site.hero.headline.is_empty());
        assert_eq!(site.highlight_scroll_delay_ms, DEFAULT_HIGHLIGHT_SCROLL_DELAY_MS);
    }

    #[test]
    fn test_log_level() {
        let mut site = SiteConfig::default();
        site.log_level = "debug".to_string();
        assert_eq!(site.log_level(), LevelFilter::Debug);
        site.log_level = "loud".to_string();
        assert_eq!(site.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_unknown_default_category_is_rejected() {
        let result = SiteConfig::from_json(r#"{"default_category": "wordpress"}"#);
        assert!(matches!(result, Err(LoadError::Config(_))));
    }
}
