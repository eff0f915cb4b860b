use phub_domain::config::{ANY_ORIGIN, HubConfig};
use tracing::warn;
use url::Url;

/// Decides which senders may drive navigation through cross-frame messages.
///
/// The hub's own origin is always allowed. Further origins come from
/// [`HubConfig::allowed_origins`]; the `"*"` entry accepts every sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginPolicy {
    any: bool,
    allowed: Vec<String>,
}

impl OriginPolicy {
    #[must_use]
    pub fn new(own_origin: &str, config: &HubConfig) -> Self {
        let any = config.allows_any_origin();

        let mut allowed: Vec<String> = std::iter::once(own_origin)
            .chain(config.allowed_origins.iter().map(String::as_str))
            .filter(|entry| entry.trim() != ANY_ORIGIN)
            .filter_map(|entry| {
                let normalized = normalize(entry);
                if normalized.is_none() {
                    warn!(origin = %entry, "Ignoring malformed origin in allow-list");
                }
                normalized
            })
            .collect();
        allowed.sort_unstable();
        allowed.dedup();

        Self { any, allowed }
    }

    /// Returns `true` if a message from `origin` may be acted upon.
    #[must_use]
    pub fn permits(&self, origin: &str) -> bool {
        if self.any {
            return true;
        }
        normalize(origin).is_some_and(|origin| self.allowed.binary_search(&origin).is_ok())
    }

    /// Normalized origins on the allow-list (empty when everyone is allowed).
    #[must_use]
    pub fn allowed(&self) -> &[String] {
        if self.any { &[] } else { self.allowed.as_slice() }
    }

    #[must_use]
    pub const fn allows_any(&self) -> bool {
        self.any
    }
}

/// Serializes the tuple origin of `raw`; opaque origins (`null`, `data:`, `file:`) yield `None`.
fn normalize(raw: &str) -> Option<String> {
    let origin = Url::parse(raw.trim()).ok()?.origin();
    origin.is_tuple().then(|| origin.ascii_serialization())
}
