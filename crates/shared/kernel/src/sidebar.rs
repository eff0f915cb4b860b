//! Sidebar model: a pure projection of the catalog.

use phub_domain::catalog::{Catalog, Group, Site};

/// One sidebar block: a header plus its entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGroup {
    pub id: String,
    pub name: String,
    /// The header is clickable only when the group has its own URL.
    pub navigable: bool,
    pub entries: Vec<NavEntry>,
}

/// A clickable site row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub id: String,
    pub label: String,
    pub description: String,
}

/// Builds the sidebar blocks in catalog order.
#[must_use]
pub fn build(catalog: &Catalog) -> Vec<NavGroup> {
    catalog.groups.iter().map(NavGroup::from).collect()
}

impl From<&Group> for NavGroup {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id.clone(),
            name: group.name.clone(),
            navigable: group.is_navigable(),
            entries: group.sites.iter().map(NavEntry::from).collect(),
        }
    }
}

impl From<&Site> for NavEntry {
    fn from(site: &Site) -> Self {
        Self { id: site.id.clone(), label: site.label.clone(), description: site.description.clone() }
    }
}
