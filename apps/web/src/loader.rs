//! One-shot catalog fetch.

use anyhow::{Context, Result, bail};
use phub::prelude::{Catalog, parse_catalog};
use tracing::info;
use url::Url;

/// Where the catalog lives, relative to the hub page.
pub const CATALOG_PATH: &str = "./sites.json";

/// Resolves [`CATALOG_PATH`] against the page URL.
///
/// # Errors
/// Fails if `page` is not an absolute URL.
pub fn catalog_url(page: &str) -> Result<Url> {
    let base = Url::parse(page).with_context(|| format!("Page URL '{page}' is not absolute"))?;
    base.join(CATALOG_PATH).context("Cannot resolve the catalog URL")
}

/// Downloads, parses and validates the catalog.
///
/// # Errors
/// Transport failures, non-success statuses and invalid documents are all errors;
/// there is no retry.
pub async fn fetch_catalog(page: &str) -> Result<Catalog> {
    let url = catalog_url(page)?;
    let response = reqwest::get(url.clone())
        .await
        .with_context(|| format!("Request for {url} failed"))?;

    let status = response.status();
    if !status.is_success() {
        bail!("Request for {url} returned {status}");
    }

    let body = response.text().await.with_context(|| format!("Cannot read {url}"))?;
    let catalog = parse_catalog(&body).with_context(|| format!("Invalid catalog at {url}"))?;

    info!(groups = catalog.groups.len(), "Catalog loaded");
    Ok(catalog)
}
