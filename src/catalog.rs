//! Portfolio Catalog
//!
//! Static item list and section headings, compiled into the binary.

use std::collections::{HashMap, HashSet};

use crate::error::LoadError;
use crate::models::{Category, Item, SectionInfo};

const EMBEDDED_CATALOG: &str = include_str!("../assets/catalog.json");

const FALLBACK_SECTION_DESCRIPTION: &str = "Explore my work in this category.";

#[derive(serde::Deserialize)]
struct CatalogFile {
    #[serde(default)]
    sections: HashMap<String, SectionInfo>,
    items: Vec<Item>,
}

/// Read-only catalog of portfolio items
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
    sections: HashMap<String, SectionInfo>,
}

/// Items of one category, in catalog order
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: Category,
    pub items: Vec<Item>,
}

impl Catalog {
    pub fn embedded() -> Result<Self, LoadError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(src: &str) -> Result<Self, LoadError> {
        let file: CatalogFile = serde_json::from_str(src).map_err(LoadError::Catalog)?;

        let mut seen = HashSet::new();
        for item in &file.items {
            if item.id.is_empty() {
                return Err(LoadError::EmptyItemId { title: item.title.clone() });
            }
            if !seen.insert(item.id.as_str()) {
                return Err(LoadError::DuplicateItemId(item.id.clone()));
            }
        }

        for slug in file.sections.keys() {
            if Category::from_slug(slug).is_none() {
                log::warn!("section info for unknown category \"{}\" will never be shown", slug);
            }
        }

        log::debug!("loaded {} items, {} section headings", file.items.len(), file.sections.len());
        Ok(Self {
            items: file.items,
            sections: file.sections,
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn find(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Configured heading, or a generic one built from the slug
    pub fn section_heading(&self, category: Category) -> SectionInfo {
        match self.sections.get(category.slug()) {
            Some(info) => info.clone(),
            None => SectionInfo {
                title: format!("{} Projects", category.slug()),
                description: FALLBACK_SECTION_DESCRIPTION.to_string(),
            },
        }
    }

    pub fn group_by_category(&self) -> Vec<CategoryGroup> {
        group_by_category(&self.items)
    }
}

/// Partition items by category.
/// Groups are ordered by first appearance; empty categories get no group.
pub fn group_by_category(items: &[Item]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|g| g.category == item.category) {
            Some(group) => group.items.push(item.clone()),
            None => groups.push(CategoryGroup {
                category: item.category,
                items: vec![item.clone()],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, category: Category) -> Item {
        Item {
            id: id.to_string(),
            title: format!("Item {}", id),
            description: String::new(),
            category,
            highlight_keyword: None,
            image: String::new(),
            technologies: vec![],
            demo_url: None,
            github_url: None,
            completion_date: None,
            long_description: None,
            features: vec![],
            process: None,
        }
    }

    #[test]
    fn test_group_by_category() {
        let items = vec![
            make_item("b1", Category::Branding),
            make_item("a1", Category::AppsDesign),
            make_item("b2", Category::Branding),
            make_item("a2", Category::AppsDesign),
            make_item("e1", Category::EmailTemplate),
        ];

        let groups = group_by_category(&items);

        // Should be: branding [b1, b2], apps-design [a1, a2], email-template [e1]
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].category, Category::Branding);
        assert_eq!(groups[1].category, Category::AppsDesign);
        assert_eq!(groups[2].category, Category::EmailTemplate);
        let ids = |g: &CategoryGroup| g.items.iter().map(|i| i.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&groups[0]), vec!["b1", "b2"]);
        assert_eq!(ids(&groups[1]), vec!["a1", "a2"]);
        assert_eq!(ids(&groups[2]), vec!["e1"]);
    }

    #[test]
    fn test_group_by_category_empty() {
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn test_grouping_embedded_catalog_is_total() {
        let catalog = Catalog::embedded().unwrap();
        let groups = catalog.group_by_category();

        let total: usize = groups.iter().map(|g| g.items.len()).sum();
        assert_eq!(total, catalog.items().len());

        for group in &groups {
            assert!(group.items.iter().all(|i| i.category == group.category));

            // Relative catalog order is preserved inside each group
            let expected: Vec<&Item> = catalog
                .items()
                .iter()
                .filter(|i| i.category == group.category)
                .collect();
            assert_eq!(group.items.iter().collect::<Vec<_>>(), expected);
        }

        let categories: Vec<Category> = groups.iter().map(|g| g.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.find("apps-design-2").map(|i| i.category), Some(Category::AppsDesign));
        assert_eq!(catalog.find("branding-1").map(|i| i.category), Some(Category::Branding));
        assert!(catalog.find("does-not-exist").is_none());
    }

    #[test]
    fn test_section_heading_fallback() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.section_heading(Category::Branding).title, "Branding");

        // web-design has no configured heading
        let heading = catalog.section_heading(Category::WebDesign);
        assert_eq!(heading.title, "web-design Projects");
        assert_eq!(heading.description, FALLBACK_SECTION_DESCRIPTION);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let src = r#"{"items": [
            {"id": "x", "title": "A", "description": "", "category": "branding"},
            {"id": "x", "title": "B", "description": "", "category": "web-design"}
        ]}"#;
        match Catalog::from_json(src) {
            Err(LoadError::DuplicateItemId(id)) => assert_eq!(id, "x"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_empty_id() {
        let src = r#"{"items": [{"id": "", "title": "A", "description": "", "category": "branding"}]}"#;
        assert!(matches!(Catalog::from_json(src), Err(LoadError::EmptyItemId { .. })));
    }

    #[test]
    fn test_rejects_unknown_category() {
        let src = r#"{"items": [{"id": "w", "title": "A", "description": "", "category": "wordpress"}]}"#;
        assert!(matches!(Catalog::from_json(src), Err(LoadError::Catalog(_))));
    }

    #[test]
    fn test_unknown_section_key_is_tolerated() {
        let src = r#"{
            "sections": {"wordpress": {"title": "WordPress", "description": "Sites"}},
            "items": [{"id": "w", "title": "A", "description": "", "category": "web-design"}]
        }"#;
        let catalog = Catalog::from_json(src).unwrap();
        assert_eq!(catalog.section_heading(Category::WebDesign).title, "web-design Projects");
    }
}
