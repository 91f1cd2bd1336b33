use serde::{Deserialize, Serialize};

use crate::shared::natural_order::natural_cmp;

// ============================================================================
// Item
// ============================================================================

/// One technique record from the catalog document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display label and selection key, unique within its category
    pub name: String,
    pub level: String,
    pub description: String,
    /// Empty when the document has no `video_link` element
    #[serde(default)]
    pub video_link: String,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        level: impl Into<String>,
        description: impl Into<String>,
        video_link: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            level: level.into(),
            description: description.into(),
            video_link: video_link.into(),
        }
    }

    pub fn has_video(&self) -> bool {
        !self.video_link.is_empty()
    }
}

// ============================================================================
// Category
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub items: Vec<Item>,
}

impl Category {
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    /// First item with exactly this name
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Decoded catalog: categories and their items in document order.
///
/// Built once per page load and never mutated after that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a category at the end of the catalog.
    ///
    /// A name that is already present keeps its original position and has its
    /// items replaced.
    pub fn insert(&mut self, name: impl Into<String>, items: Vec<Item>) {
        let name = name.into();
        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.items = items,
            None => self.categories.push(Category::new(name, items)),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// Every level used by any item, deduplicated and in numeric-aware order
    pub fn distinct_levels(&self) -> Vec<String> {
        let mut levels: Vec<String> = Vec::new();
        for item in self.categories.iter().flat_map(|c| c.items.iter()) {
            if !levels.iter().any(|l| *l == item.level) {
                levels.push(item.level.clone());
            }
        }
        levels.sort_by(|a, b| natural_cmp(a, b));
        levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, level: &str) -> Item {
        Item::new(name, level, "", "")
    }

    #[test]
    fn test_insert_keeps_document_order() {
        let mut catalog = Catalog::new();
        catalog.insert("Stances", vec![]);
        catalog.insert("Kicks", vec![]);
        catalog.insert("Blocks", vec![]);

        let names: Vec<&str> = catalog.category_names().collect();
        assert_eq!(names, vec!["Stances", "Kicks", "Blocks"]);
    }

    #[test]
    fn test_insert_duplicate_replaces_items_in_place() {
        let mut catalog = Catalog::new();
        catalog.insert("Kicks", vec![item("Mae Geri", "5th Kyu")]);
        catalog.insert("Blocks", vec![]);
        catalog.insert("Kicks", vec![item("Yoko Geri", "3rd Kyu")]);

        let names: Vec<&str> = catalog.category_names().collect();
        assert_eq!(names, vec!["Kicks", "Blocks"]);
        let kicks = catalog.category("Kicks").unwrap();
        assert_eq!(kicks.items, vec![item("Yoko Geri", "3rd Kyu")]);
    }

    #[test]
    fn test_find_item_returns_first_match() {
        let first = Item::new("Mae Geri", "5th Kyu", "first", "");
        let second = Item::new("Mae Geri", "4th Kyu", "second", "");
        let category = Category::new("Kicks", vec![first.clone(), second]);

        assert_eq!(category.find_item("Mae Geri"), Some(&first));
        assert_eq!(category.find_item("mae geri"), None);
    }

    #[test]
    fn test_distinct_levels_dedup_and_order() {
        let mut catalog = Catalog::new();
        catalog.insert("A", vec![item("a", "Level 10"), item("b", "Level 2")]);
        catalog.insert("B", vec![item("c", "Level 2"), item("d", "Level 1")]);

        assert_eq!(
            catalog.distinct_levels(),
            vec!["Level 1", "Level 2", "Level 10"]
        );
        assert_eq!(catalog.item_count(), 4);
    }

    #[test]
    fn test_has_video() {
        assert!(!item("a", "1").has_video());
        assert!(Item::new("a", "1", "", "https://example.com/v").has_video());
    }
}
