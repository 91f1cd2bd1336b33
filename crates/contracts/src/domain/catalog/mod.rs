pub mod aggregate;
pub mod error;
pub mod parser;

pub use aggregate::{Catalog, Category, Item};
pub use error::CatalogError;
pub use parser::parse_catalog;
