use anyhow::{Context, Result};
use phub::kernel::sidebar;
use phub::prelude::*;
use std::path::Path;

/// Prints the sidebar blocks in catalog order.
///
/// Navigable group headers are followed by their URL.
///
/// # Errors
/// Fails if the catalog cannot be loaded.
pub fn run(path: &Path) -> Result<()> {
    let catalog =
        load_catalog(path).with_context(|| format!("Cannot load catalog {}", path.display()))?;

    for group in sidebar::build(&catalog) {
        match catalog.group(&group.id).and_then(|g| g.url.as_deref()) {
            Some(url) => println!("{} [{}] -> {url}", group.name, group.id),
            None => println!("{} [{}]", group.name, group.id),
        }
        for entry in &group.entries {
            if entry.description.is_empty() {
                println!("  {} [{}]", entry.label, entry.id);
            } else {
                println!("  {} [{}]: {}", entry.label, entry.id, entry.description);
            }
        }
    }

    Ok(())
}
