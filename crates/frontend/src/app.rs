use crate::domain::catalog::ui::browser::CatalogBrowser;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide the runtime configuration to the whole app via context.
    provide_context(config);

    view! {
        <main class="catalog-app">
            <CatalogBrowser />
        </main>
    }
}
