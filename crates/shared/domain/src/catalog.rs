use crate::config::HubConfig;
use serde::{Deserialize, Serialize};

/// The configuration document: navigation groups in display order.
///
/// Loaded once at startup and read-only afterwards.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Optional presentation settings embedded in the document.
    #[serde(default)]
    pub hub: HubConfig,
    pub groups: Vec<Group>,
}

/// A sidebar section. When `url` is present the group header is itself a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub sites: Vec<Site>,
}

/// A navigable entry inside a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    /// Whether the target tolerates being framed. Cannot be detected, only configured.
    #[serde(default)]
    pub embed: bool,
}

impl Catalog {
    #[must_use]
    pub fn new(groups: Vec<Group>) -> Self {
        Self { hub: HubConfig::default(), groups }
    }

    /// Iterates over every site, in sidebar order.
    pub fn sites(&self) -> impl Iterator<Item = &Site> {
        self.groups.iter().flat_map(|group| group.sites.iter())
    }

    #[must_use]
    pub fn site(&self, id: &str) -> Option<&Site> {
        self.sites().find(|site| site.id == id)
    }

    #[must_use]
    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.id == id)
    }
}

impl Group {
    /// A group is navigable only when it carries its own URL.
    #[must_use]
    pub const fn is_navigable(&self) -> bool {
        self.url.is_some()
    }
}
