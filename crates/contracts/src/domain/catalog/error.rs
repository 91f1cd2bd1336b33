use thiserror::Error;

/// Errors that abort a catalog load
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Transport failure or unreadable response body
    #[error("failed to fetch catalog: {0}")]
    Fetch(String),

    #[error("catalog request failed with HTTP status {0}")]
    Status(u16),

    /// The document is not well-formed XML
    #[error("XML parse error: {0}")]
    Xml(String),

    #[error("category #{index} has no name attribute")]
    MissingCategoryName { index: usize },

    #[error("item #{index} in category '{category}' is missing required field <{field}>")]
    MissingField {
        category: String,
        index: usize,
        field: &'static str,
    },
}
