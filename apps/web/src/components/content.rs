use dioxus::prelude::*;
use phub::prelude::Content;

use super::use_hub;
use crate::browser;

/// The framed page, its loading indicator, or the fallback link.
#[component]
pub fn ContentArea() -> Element {
    let mut hub = use_hub();
    let content = hub.read().view().content().clone();

    match content {
        Content::Blank => rsx! {
            section { class: "content" }
        },
        Content::Embedded { url, loading } => rsx! {
            section { class: "content",
                if loading {
                    div { class: "loading-spinner" }
                }
                iframe {
                    class: "content-frame",
                    src: "{url}",
                    title: "Hub content",
                    onload: move |_| hub.write().frame_loaded(),
                    onerror: move |_| hub.write().frame_failed(),
                }
            }
        },
        Content::Fallback { url } => rsx! {
            section { class: "content",
                div { class: "fallback-message",
                    h3 { "This page can't be shown inside the hub" }
                    p { "The site does not allow embedding. Open it in a new tab instead." }
                    button {
                        class: "fallback-open-tab",
                        onclick: move |_| browser::open_external(&url),
                        "Open in new tab ↗"
                    }
                }
            }
        },
    }
}
