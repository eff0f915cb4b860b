use anyhow::{Context, Result, bail};
use phub::prelude::*;
use std::fs;
use std::path::Path;

/// Parses the catalog and prints every issue found.
///
/// # Errors
/// Fails if the file cannot be read or parsed, or if any error-level issue is found.
pub fn run(path: &Path) -> Result<()> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    let catalog = parse_document(&raw).with_context(|| format!("Cannot parse {}", path.display()))?;

    let issues = validate(&catalog);
    for issue in &issues {
        println!("{issue}");
    }

    let errors = issues.iter().filter(|issue| issue.is_error()).count();
    let warnings = issues.len() - errors;
    tracing::debug!(errors, warnings, "Catalog checked");

    if errors > 0 {
        bail!("{} has {errors} error(s) and {warnings} warning(s)", path.display());
    }

    println!(
        "ok: {} group(s), {} site(s), {warnings} warning(s)",
        catalog.groups.len(),
        catalog.sites().count()
    );
    Ok(())
}
