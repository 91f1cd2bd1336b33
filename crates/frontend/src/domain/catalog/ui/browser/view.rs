use super::view_model::CatalogBrowserViewModel;
use crate::domain::catalog::ui::details::DetailsPanel;
use crate::shared::components::ui::Select;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

/// Category / level / name selectors with the details panel below them.
///
/// Starts the catalog load on mount; the controls stay empty until it
/// completes.
#[component]
pub fn CatalogBrowser() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let vm = CatalogBrowserViewModel::new();
    vm.load(config.catalog_url.clone());

    let category_options = Signal::derive(move || vm.category_options());
    let level_options = Signal::derive(move || vm.level_options());
    let name_options = Signal::derive(move || vm.name_options());

    let on_category_change = Callback::new(move |value: String| vm.on_category_change(value));
    let on_level_change = Callback::new(move |value: String| vm.on_level_change(value));
    let on_name_change = Callback::new(move |value: String| vm.on_name_change(value));

    view! {
        <div class="catalog-browser">
            <div class="catalog-browser__filters">
                <Select
                    id="category"
                    label="Category"
                    value=Signal::derive(move || vm.selected_category())
                    options=category_options
                    on_change=on_category_change
                />
                <Select
                    id="level"
                    label="Level"
                    value=Signal::derive(move || vm.selected_level())
                    options=level_options
                    on_change=on_level_change
                />
                <Select
                    id="name"
                    label="Name"
                    value=Signal::derive(move || vm.selected_name())
                    options=name_options
                    on_change=on_name_change
                />
            </div>
            <DetailsPanel
                details=Signal::derive(move || vm.details())
                video_width=config.video_width
                video_height=config.video_height
            />
        </div>
    }
}
