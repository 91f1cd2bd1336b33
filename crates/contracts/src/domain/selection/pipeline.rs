//! Pure stages of the selection pipeline:
//! selection change -> filtered items -> name list -> item lookup -> details

use super::details::ItemDetails;
use super::level_filter::LevelFilter;
use super::state::Selection;
use crate::domain::catalog::{Catalog, Item};

/// Category control options, in catalog order
pub fn category_options(catalog: &Catalog) -> Vec<String> {
    catalog.category_names().map(str::to_string).collect()
}

/// Level control options: `All` first, then every distinct level in
/// numeric-aware order
pub fn level_options(catalog: &Catalog) -> Vec<LevelFilter> {
    let mut options = vec![LevelFilter::All];
    options.extend(
        catalog
            .distinct_levels()
            .iter()
            .map(|level| LevelFilter::from_value(level))
            .filter(|filter| *filter != LevelFilter::All),
    );
    options
}

/// Items of `category` accepted by `level`, in document order.
/// Unknown categories yield nothing.
pub fn filter_items<'a>(catalog: &'a Catalog, category: &str, level: &LevelFilter) -> Vec<&'a Item> {
    catalog
        .category(category)
        .map(|c| c.items.iter().filter(|item| level.matches(&item.level)).collect())
        .unwrap_or_default()
}

/// Looks up the selected item (first match by name) and builds its details.
/// `None` when nothing is selected or the selection is stale.
pub fn render_details(catalog: &Catalog, selection: &Selection) -> Option<ItemDetails> {
    let category = catalog.category(selection.category.as_deref()?)?;
    let item = category.find_item(selection.name.as_deref()?)?;
    Some(ItemDetails::from_item(item))
}
