use contracts::domain::catalog::{parse_catalog, Catalog, CatalogError};
use gloo_net::http::Request;

/// Fetch the catalog document and decode it
pub async fn fetch_catalog(url: &str) -> Result<Catalog, CatalogError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| CatalogError::Fetch(e.to_string()))?;

    if !response.ok() {
        return Err(CatalogError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| CatalogError::Fetch(e.to_string()))?;

    parse_catalog(&body)
}
