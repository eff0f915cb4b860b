use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

pub const DEFAULT_TITLE: &str = "Projects Hub";
pub const DEFAULT_HOME_URL: &str = "./sites/home/";

/// Wildcard entry for [`HubConfigInner::allowed_origins`] that accepts messages from anyone.
pub const ANY_ORIGIN: &str = "*";

/// Presentation settings for the hub shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HubConfigInner {
    /// Heading shown while the home page is displayed.
    pub title: String,
    /// Page loaded into the frame on Home.
    #[serde(alias = "home_url")]
    pub home_url: String,
    /// Origins, besides the hub's own, that may post navigation requests.
    #[serde(alias = "allowed_origins")]
    pub allowed_origins: Vec<String>,
}

/// Thin Arc-wrapped settings for inexpensive cloning into the view layer.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubConfig {
    #[serde(flatten, default)]
    inner: Arc<HubConfigInner>,
}

impl Deref for HubConfig {
    type Target = HubConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for HubConfig {
    fn deref_mut(&mut self) -> &mut HubConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

impl HubConfig {
    /// True when the allow-list opts into accepting any origin.
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin.trim() == ANY_ORIGIN)
    }
}

impl Default for HubConfigInner {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            home_url: DEFAULT_HOME_URL.to_owned(),
            allowed_origins: Vec::new(),
        }
    }
}
