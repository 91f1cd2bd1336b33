pub mod details;
pub mod level_filter;
pub mod pipeline;
pub mod state;

pub use details::ItemDetails;
pub use level_filter::{LevelFilter, ALL_LEVELS};
pub use pipeline::{category_options, filter_items, level_options, render_details};
pub use state::{BrowserState, Selection};
