pub mod view;
pub mod view_model;

pub use view::CatalogBrowser;
pub use view_model::CatalogBrowserViewModel;
