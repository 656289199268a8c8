//! Portfolio Models
//!
//! Catalog entries and the fixed category set.

use serde::{Deserialize, Serialize};

/// Image shown when an item has none
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Portfolio category, serialized as its kebab-case slug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    AppsDesign,
    WebDesign,
    Branding,
    EmailTemplate,
}

impl Category {
    /// Navigation order
    pub const ALL: [Category; 4] = [
        Category::AppsDesign,
        Category::WebDesign,
        Category::Branding,
        Category::EmailTemplate,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::AppsDesign => "apps-design",
            Category::WebDesign => "web-design",
            Category::Branding => "branding",
            Category::EmailTemplate => "email-template",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::AppsDesign => "Apps Design",
            Category::WebDesign => "Web Design",
            Category::Branding => "Branding",
            Category::EmailTemplate => "Email Template",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.slug() == slug)
    }

    /// DOM id of the rendered section for this category
    pub fn section_id(self) -> String {
        format!("section-{}", self.slug())
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::AppsDesign
    }
}

/// Portfolio entry (matches catalog.json)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub highlight_keyword: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub completion_date: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub process: Option<String>,
}

impl Item {
    pub fn image_src(&self) -> &str {
        if self.image.is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            &self.image
        }
    }

    /// First `limit` technology tags and how many were left out
    pub fn tech_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.technologies.len().min(limit);
        (&self.technologies[..shown], self.technologies.len() - shown)
    }
}

/// Section heading text, keyed by category slug in the catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionInfo {
    pub title: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(technologies: &[&str]) -> Item {
        Item {
            id: "apps-design-1".to_string(),
            title: "Finance".to_string(),
            description: "".to_string(),
            category: Category::AppsDesign,
            highlight_keyword: None,
            image: String::new(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            demo_url: None,
            github_url: None,
            completion_date: None,
            long_description: None,
            features: vec![],
            process: None,
        }
    }

    #[test]
    fn test_category_slugs() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
        }
        assert_eq!(Category::from_slug("wordpress"), None);
        assert_eq!(Category::EmailTemplate.section_id(), "section-email-template");
    }

    #[test]
    fn test_category_serde_uses_slug() {
        let json = serde_json::to_string(&Category::WebDesign).unwrap();
        assert_eq!(json, "\"web-design\"");
        let parsed: Category = serde_json::from_str("\"email-template\"").unwrap();
        assert_eq!(parsed, Category::EmailTemplate);
        assert!(serde_json::from_str::<Category>("\"print\"").is_err());
    }

    #[test]
    fn test_tech_preview() {
        let item = make_item(&["Figma", "Figjam", "Photoshop", "Google Doc", "Illustrator"]);
        let (shown, more) = item.tech_preview(3);
        assert_eq!(shown, &["Figma", "Figjam", "Photoshop"]);
        assert_eq!(more, 2);

        let item = make_item(&["Illustrator", "Google Doc"]);
        let (shown, more) = item.tech_preview(3);
        assert_eq!(shown.len(), 2);
        assert_eq!(more, 0);
    }

    #[test]
    fn test_image_placeholder() {
        let mut item = make_item(&[]);
        assert_eq!(item.image_src(), PLACEHOLDER_IMAGE);
        item.image = "/design/branding-1.png".to_string();
        assert_eq!(item.image_src(), "/design/branding-1.png");
    }
}
