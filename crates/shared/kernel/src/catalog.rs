//! Loading and checking the catalog document.

use crate::error::{KernelError, KernelErrorExt, Result};
use phub_domain::catalog::Catalog;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// How serious a catalog finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
}

/// A single finding produced by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
}

impl Issue {
    fn error(message: impl Into<String>) -> Self {
        Self { severity: Severity::Error, message: message.into() }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self { severity: Severity::Warning, message: message.into() }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{level}: {}", self.message)
    }
}

/// Parses and validates a catalog document.
///
/// # Errors
/// Returns [`KernelError::Parse`] if the text is not a catalog document and
/// [`KernelError::InvalidCatalog`] for the first error-level [`Issue`].
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let catalog = parse_document(json)?;
    ensure_valid(&catalog)?;
    Ok(catalog)
}

/// Parses a catalog document without checking it; pair with [`validate`] to list every issue.
///
/// # Errors
/// Returns [`KernelError::Parse`] if the text is not a catalog document.
pub fn parse_document(json: &str) -> Result<Catalog> {
    serde_json::from_str(json).context("Malformed catalog document")
}

/// Reads a catalog document from disk.
///
/// # Errors
/// Fails when the file cannot be read, or for the reasons listed in [`parse_catalog`].
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .context(format!("Failed to read catalog at {}", path.display()))?;
    parse_catalog(&raw)
}

/// Fails on the first error-level issue, logging warnings along the way.
///
/// # Errors
/// Returns [`KernelError::InvalidCatalog`] describing the first error found.
pub fn ensure_valid(catalog: &Catalog) -> Result<()> {
    let issues = validate(catalog);
    for issue in issues.iter().filter(|issue| !issue.is_error()) {
        warn!(issue = %issue.message, "Catalog warning");
    }

    if let Some(issue) = issues.into_iter().find(Issue::is_error) {
        return Err(KernelError::InvalidCatalog { message: issue.message.into(), context: None });
    }

    debug!(
        groups = catalog.groups.len(),
        sites = catalog.sites().count(),
        "Catalog validated"
    );
    Ok(())
}

/// Checks identifier uniqueness and common authoring mistakes.
#[must_use]
pub fn validate(catalog: &Catalog) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut group_ids = HashSet::new();
    let mut site_ids = HashSet::new();

    for group in &catalog.groups {
        if group.id.trim().is_empty() {
            issues.push(Issue::error(format!("group '{}' has an empty id", group.name)));
        } else if !group_ids.insert(group.id.as_str()) {
            issues.push(Issue::error(format!("duplicate group id '{}'", group.id)));
        }

        match group.url.as_deref() {
            Some(url) if url.trim().is_empty() => {
                issues.push(Issue::error(format!("group '{}' has an empty url", group.id)));
            },
            None if group.sites.is_empty() => {
                issues.push(Issue::warning(format!(
                    "group '{}' has neither a url nor sites and cannot be reached",
                    group.id
                )));
            },
            _ => {},
        }

        for site in &group.sites {
            if site.id.trim().is_empty() {
                issues.push(Issue::error(format!(
                    "site '{}' in group '{}' has an empty id",
                    site.label, group.id
                )));
            } else if !site_ids.insert(site.id.as_str()) {
                issues.push(Issue::error(format!("duplicate site id '{}'", site.id)));
            }

            if site.url.trim().is_empty() {
                issues.push(Issue::error(format!("site '{}' has an empty url", site.id)));
            } else if site.embed && site.url.starts_with("http://") {
                issues.push(Issue::warning(format!(
                    "site '{}' embeds a plain http url; browsers block it on https hubs",
                    site.id
                )));
            }
        }
    }

    let mut shared: Vec<_> = group_ids.intersection(&site_ids).collect();
    shared.sort_unstable();
    for id in shared {
        issues.push(Issue::warning(format!(
            "id '{id}' names both a site and a group; the site wins when resolving"
        )));
    }

    issues
}
