//! Window events the hub reacts to, bridged into Rust through `document::eval`.
//!
//! Each listener stays installed for the life of the page and forwards events
//! over the eval channel; the Rust side applies them to the navigator.

use dioxus::prelude::*;
use phub::prelude::{MessageOutcome, Navigator, Screen};
use serde::Deserialize;
use tracing::debug;

use crate::browser::BrowserLocation;

const MESSAGE_LISTENER: &str = r#"
window.addEventListener("message", (event) => {
    try {
        dioxus.send({ origin: event.origin, data: event.data ?? null });
    } catch (_) {
        // Payloads that cannot be serialized are not navigation requests.
    }
});
"#;

const POPSTATE_LISTENER: &str = r#"
window.addEventListener("popstate", () => dioxus.send(window.location.search));
"#;

/// A `message` event as forwarded from the page.
#[derive(Debug, Deserialize)]
pub struct InboundMessage {
    pub origin: String,
    pub data: serde_json::Value,
}

/// Forwards cross-frame messages to [`Navigator::handle_message`].
pub fn use_message_listener(mut hub: Signal<Navigator<Screen, BrowserLocation>>) {
    use_future(move || async move {
        let mut channel = document::eval(MESSAGE_LISTENER);
        while let Ok(message) = channel.recv::<InboundMessage>().await {
            let outcome = hub.write().handle_message(&message.origin, &message.data);
            if let MessageOutcome::UnknownSite(id) = outcome {
                debug!(site = %id, "Navigation request for a site outside the catalog");
            }
        }
    });
}

/// Re-applies the location after back/forward.
pub fn use_history_listener(mut hub: Signal<Navigator<Screen, BrowserLocation>>) {
    use_future(move || async move {
        let mut channel = document::eval(POPSTATE_LISTENER);
        while let Ok(search) = channel.recv::<String>().await {
            debug!(search = %search, "History changed");
            hub.write().restore();
        }
    });
}
