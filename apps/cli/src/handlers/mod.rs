pub mod check;
pub mod message;
pub mod resolve;
pub mod tree;

use anyhow::{Context, Result};
use phub::kernel::config::load_settings;
use phub::prelude::*;
use std::path::Path;

/// Loads a catalog and starts a navigator on `query` against an in-memory location.
///
/// Settings from `settings` (plus `PHUB__*` overrides) replace the catalog's own `hub` object.
pub(crate) fn start(
    catalog: &Path,
    query: &str,
    settings: Option<&Path>,
) -> Result<Navigator<Screen, MemoryLocation>> {
    let catalog = load_catalog(catalog)
        .with_context(|| format!("Cannot load catalog {}", catalog.display()))?;

    let location = MemoryLocation::default().with_search(query);
    let mut nav = Navigator::new(catalog, Screen::default(), location);
    if let Some(path) = settings {
        let config = load_settings(path)
            .with_context(|| format!("Cannot load settings {}", path.display()))?;
        nav = nav.with_config(config);
    }

    nav.start();
    Ok(nav)
}

/// Prints the state a browser would show after the last navigation.
pub(crate) fn print_screen(nav: &Navigator<Screen, MemoryLocation>) {
    let screen = nav.view();
    let search = nav.location().search();

    println!("selection: {}", nav.selection());
    println!("query:     {}", if search.is_empty() { "(none)" } else { search.as_str() });
    println!("title:     {}", screen.title());
    match screen.content() {
        Content::Blank => println!("content:   blank"),
        Content::Embedded { url, .. } => println!("content:   embedded {url}"),
        Content::Fallback { url } => println!("content:   fallback {url}"),
    }
    println!("external:  {}", screen.external_link().unwrap_or("(none)"));
}
