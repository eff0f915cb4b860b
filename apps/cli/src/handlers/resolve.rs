use anyhow::Result;
use std::path::Path;

/// Starts the hub on `query` and prints the resulting screen.
///
/// # Errors
/// Fails if the catalog or the settings cannot be loaded.
pub fn run(catalog: &Path, query: &str, settings: Option<&Path>) -> Result<()> {
    let nav = super::start(catalog, query, settings)?;
    super::print_screen(&nav);
    Ok(())
}
