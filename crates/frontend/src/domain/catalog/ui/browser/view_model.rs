use crate::domain::catalog::model;
use contracts::domain::catalog::Catalog;
use contracts::domain::selection::{
    category_options, level_options, BrowserState, ItemDetails, LevelFilter,
};
use leptos::prelude::*;
use std::sync::Arc;

/// ViewModel for the catalog browser: the loaded catalog plus the current
/// selection snapshot. Every control change replaces the snapshot.
#[derive(Clone, Copy)]
pub struct CatalogBrowserViewModel {
    /// `None` until the catalog has loaded; stays `None` if loading fails
    pub catalog: RwSignal<Option<Arc<Catalog>>>,
    pub state: RwSignal<BrowserState>,
}

impl CatalogBrowserViewModel {
    pub fn new() -> Self {
        Self {
            catalog: RwSignal::new(None),
            state: RwSignal::new(BrowserState::default()),
        }
    }

    /// Fetch the catalog once and initialize the controls.
    /// Failures are logged and leave the browser empty.
    pub fn load(&self, url: String) {
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            log::debug!("Fetching catalog from {}", url);
            match model::fetch_catalog(&url).await {
                Ok(catalog) => {
                    log::info!(
                        "Catalog loaded: {} categories, {} items",
                        catalog.categories().len(),
                        catalog.item_count()
                    );
                    this.initialize(catalog);
                }
                Err(e) => log::error!("Error loading catalog from {}: {}", url, e),
            }
        });
    }

    pub fn initialize(&self, catalog: Catalog) {
        let state = BrowserState::initial(&catalog);
        self.catalog.set(Some(Arc::new(catalog)));
        self.state.set(state);
    }

    /// Options of the category control as (value, label)
    pub fn category_options(&self) -> Vec<(String, String)> {
        self.catalog.with(|catalog| {
            catalog
                .as_deref()
                .map(category_options)
                .unwrap_or_default()
                .into_iter()
                .map(|name| (name.clone(), name))
                .collect()
        })
    }

    /// Level options: the loaded catalog's levels, or nothing before load
    pub fn level_options(&self) -> Vec<(String, String)> {
        self.catalog.with(|catalog| {
            catalog
                .as_deref()
                .map(level_options)
                .unwrap_or_default()
                .iter()
                .map(|level| (level.as_value().to_string(), level.as_value().to_string()))
                .collect()
        })
    }

    pub fn name_options(&self) -> Vec<(String, String)> {
        self.state.with(|state| {
            state
                .names
                .iter()
                .map(|name| (name.clone(), name.clone()))
                .collect()
        })
    }

    pub fn selected_category(&self) -> String {
        self.state
            .with(|state| state.selection.category.clone().unwrap_or_default())
    }

    pub fn selected_level(&self) -> String {
        self.state
            .with(|state| state.selection.level.as_value().to_string())
    }

    pub fn selected_name(&self) -> String {
        self.state
            .with(|state| state.selection.name.clone().unwrap_or_default())
    }

    pub fn details(&self) -> Option<ItemDetails> {
        self.state.with(|state| state.details.clone())
    }

    pub fn on_category_change(&self, category: String) {
        log::debug!("Category changed: {}", category);
        self.apply(|catalog, state| state.select_category(catalog, &category));
    }

    pub fn on_level_change(&self, level: String) {
        log::debug!("Level changed: {}", level);
        let level = LevelFilter::from_value(&level);
        self.apply(move |catalog, state| state.select_level(catalog, level));
    }

    pub fn on_name_change(&self, name: String) {
        log::debug!("Name changed: {}", name);
        self.apply(|catalog, state| state.select_name(catalog, &name));
    }

    /// Replace the snapshot with the result of `transition`.
    /// Events before the catalog has loaded are ignored.
    fn apply(&self, transition: impl FnOnce(&Catalog, &BrowserState) -> BrowserState) {
        let Some(catalog) = self.catalog.get_untracked() else {
            return;
        };
        let next = self.state.with_untracked(|state| transition(catalog.as_ref(), state));
        self.state.set(next);
    }
}

impl Default for CatalogBrowserViewModel {
    fn default() -> Self {
        Self::new()
    }
}
