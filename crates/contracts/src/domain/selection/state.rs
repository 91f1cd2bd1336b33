use serde::{Deserialize, Serialize};

use super::details::ItemDetails;
use super::level_filter::LevelFilter;
use super::pipeline::{filter_items, render_details};
use crate::domain::catalog::Catalog;

/// The (category, level, name) triple driving what is rendered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub category: Option<String>,
    pub level: LevelFilter,
    pub name: Option<String>,
}

/// Snapshot of the browser after one event.
///
/// Every transition takes the current snapshot plus the catalog and returns a
/// new snapshot; nothing is read back from the controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserState {
    pub selection: Selection,
    /// Current contents of the name control
    pub names: Vec<String>,
    pub details: Option<ItemDetails>,
}

impl BrowserState {
    /// State right after the catalog is loaded: first category, all levels,
    /// first matching name
    pub fn initial(catalog: &Catalog) -> Self {
        let selection = Selection {
            category: catalog.category_names().next().map(str::to_string),
            level: LevelFilter::All,
            name: None,
        };
        Self::default().refresh_names(catalog, selection)
    }

    /// An empty value means "no category"
    pub fn select_category(&self, catalog: &Catalog, category: &str) -> Self {
        let selection = Selection {
            category: (!category.is_empty()).then(|| category.to_string()),
            level: self.selection.level.clone(),
            name: None,
        };
        self.refresh_names(catalog, selection)
    }

    pub fn select_level(&self, catalog: &Catalog, level: LevelFilter) -> Self {
        let selection = Selection {
            category: self.selection.category.clone(),
            level,
            name: None,
        };
        self.refresh_names(catalog, selection)
    }

    /// Names not in the current list are stale and leave the state untouched
    pub fn select_name(&self, catalog: &Catalog, name: &str) -> Self {
        if !self.names.iter().any(|n| n == name) {
            return self.clone();
        }
        let selection = Selection {
            name: Some(name.to_string()),
            ..self.selection.clone()
        };
        match render_details(catalog, &selection) {
            Some(details) => Self {
                selection,
                names: self.names.clone(),
                details: Some(details),
            },
            None => self.clone(),
        }
    }

    /// Recomputes the name list for `selection` and selects its first entry.
    ///
    /// Without a category the name list is cleared and the details stay as
    /// they were. A filter that matches nothing clears the details.
    pub fn refresh_names(&self, catalog: &Catalog, selection: Selection) -> Self {
        let Some(category) = selection.category.as_deref() else {
            return Self {
                selection: Selection {
                    name: None,
                    ..selection
                },
                names: Vec::new(),
                details: self.details.clone(),
            };
        };

        let items = filter_items(catalog, category, &selection.level);
        let names: Vec<String> = items.iter().map(|item| item.name.clone()).collect();

        let selection = Selection {
            name: names.first().cloned(),
            ..selection
        };
        let details = render_details(catalog, &selection);

        Self {
            selection,
            names,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Item;

    fn kicks_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert(
            "Kicks",
            vec![
                Item::new("Mae Geri", "5th Kyu", "Front kick", ""),
                Item::new("Yoko Geri", "3rd Kyu", "Side kick", "https://example.com/v1"),
            ],
        );
        catalog
    }

    fn dojo_catalog() -> Catalog {
        let mut catalog = kicks_catalog();
        catalog.insert(
            "Blocks",
            vec![
                Item::new("Age Uke", "8th Kyu", "Rising block", ""),
                Item::new("Soto Uke", "5th Kyu", "Outside block", ""),
            ],
        );
        catalog.insert("Kata", vec![]);
        catalog
    }

    /// Every non-empty name belongs to the filtered list and details match it
    fn assert_consistent(catalog: &Catalog, state: &BrowserState) {
        if let Some(name) = &state.selection.name {
            let category = state.selection.category.as_deref().unwrap();
            let filtered: Vec<&str> = filter_items(catalog, category, &state.selection.level)
                .iter()
                .map(|i| i.name.as_str())
                .collect();
            assert!(filtered.contains(&name.as_str()), "{name} not in {filtered:?}");
            assert_eq!(state.details.as_ref().map(|d| &d.name), Some(name));
        }
    }

    #[test]
    fn test_kicks_scenario() {
        let catalog = kicks_catalog();
        let state = BrowserState::initial(&catalog)
            .select_category(&catalog, "Kicks")
            .select_level(&catalog, LevelFilter::from_value("All"));

        assert_eq!(state.names, vec!["Mae Geri", "Yoko Geri"]);

        let state = state.select_name(&catalog, "Yoko Geri");
        let details = state.details.clone().unwrap();
        assert_eq!(details.heading, "Yoko Geri (3rd Kyu)");
        assert_eq!(details.description, "Side kick");
        assert_eq!(details.video_link.as_deref(), Some("https://example.com/v1"));

        let state = state.select_name(&catalog, "Mae Geri");
        let details = state.details.unwrap();
        assert_eq!(details.heading, "Mae Geri (5th Kyu)");
        assert_eq!(details.description, "Front kick");
        assert_eq!(details.video_link, None);
    }

    #[test]
    fn test_initial_selects_first_of_everything() {
        let catalog = dojo_catalog();
        let state = BrowserState::initial(&catalog);

        assert_eq!(state.selection.category.as_deref(), Some("Kicks"));
        assert_eq!(state.selection.level, LevelFilter::All);
        assert_eq!(state.selection.name.as_deref(), Some("Mae Geri"));
        assert_eq!(state.details.unwrap().heading, "Mae Geri (5th Kyu)");
    }

    #[test]
    fn test_initial_on_empty_catalog() {
        let state = BrowserState::initial(&Catalog::new());
        assert_eq!(state, BrowserState::default());
    }

    #[test]
    fn test_level_filter_applies_across_category_changes() {
        let catalog = dojo_catalog();
        let state = BrowserState::initial(&catalog)
            .select_level(&catalog, LevelFilter::from_value("5th Kyu"));
        assert_eq!(state.names, vec!["Mae Geri"]);

        let state = state.select_category(&catalog, "Blocks");
        assert_eq!(state.names, vec!["Soto Uke"]);
        assert_eq!(state.selection.name.as_deref(), Some("Soto Uke"));
        assert_consistent(&catalog, &state);
    }

    #[test]
    fn test_empty_filter_clears_name_and_details() {
        let catalog = dojo_catalog();
        let state = BrowserState::initial(&catalog)
            .select_level(&catalog, LevelFilter::from_value("8th Kyu"));

        assert!(state.names.is_empty());
        assert_eq!(state.selection.name, None);
        assert_eq!(state.details, None);

        let state = state.select_category(&catalog, "Kata");
        assert!(state.names.is_empty());
        assert_eq!(state.details, None);
    }

    #[test]
    fn test_no_category_keeps_details() {
        let catalog = dojo_catalog();
        let before = BrowserState::initial(&catalog);
        let after = before.select_category(&catalog, "");

        assert_eq!(after.selection.category, None);
        assert!(after.names.is_empty());
        assert_eq!(after.selection.name, None);
        assert_eq!(after.details, before.details);
    }

    #[test]
    fn test_stale_name_is_ignored() {
        let catalog = dojo_catalog();
        let state = BrowserState::initial(&catalog);

        assert_eq!(state.select_name(&catalog, "Age Uke"), state);
        assert_eq!(state.select_name(&catalog, "Nobody"), state);
    }

    #[test]
    fn test_duplicate_names_resolve_to_first() {
        let mut catalog = Catalog::new();
        catalog.insert(
            "C",
            vec![
                Item::new("Twin", "1", "first", ""),
                Item::new("Twin", "2", "second", ""),
            ],
        );
        let state = BrowserState::initial(&catalog)
            .select_level(&catalog, LevelFilter::from_value("2"));

        // only the second record passes the filter, but lookup is by name
        assert_eq!(state.names, vec!["Twin"]);
        assert_eq!(state.details.unwrap().description, "first");
    }

    #[test]
    fn test_consistency_over_event_sequence() {
        let catalog = dojo_catalog();
        let mut state = BrowserState::initial(&catalog);
        assert_consistent(&catalog, &state);

        let steps: Vec<Box<dyn Fn(&BrowserState) -> BrowserState + '_>> = vec![
            Box::new(|s| s.select_category(&catalog, "Blocks")),
            Box::new(|s| s.select_name(&catalog, "Soto Uke")),
            Box::new(|s| s.select_level(&catalog, LevelFilter::from_value("8th Kyu"))),
            Box::new(|s| s.select_name(&catalog, "Soto Uke")),
            Box::new(|s| s.select_category(&catalog, "Kicks")),
            Box::new(|s| s.select_level(&catalog, LevelFilter::from_value("3rd Kyu"))),
            Box::new(|s| s.select_category(&catalog, "Kata")),
            Box::new(|s| s.select_level(&catalog, LevelFilter::All)),
            Box::new(|s| s.select_category(&catalog, "Kicks")),
            Box::new(|s| s.select_name(&catalog, "Yoko Geri")),
        ];

        for step in &steps {
            state = step(&state);
            assert_consistent(&catalog, &state);
        }
        assert_eq!(state.selection.name.as_deref(), Some("Yoko Geri"));
    }
}
