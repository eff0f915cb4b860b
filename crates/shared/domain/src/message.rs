//! Messages that framed pages may post to the hub.

use serde::{Deserialize, Serialize};

/// Inbound cross-frame request, discriminated by its `type` field.
///
/// ```json
/// { "type": "navigate", "siteId": "blog" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum FrameMessage {
    /// Asks the hub to switch to a site, exactly as a sidebar click would.
    Navigate { site_id: String },
}
