use dioxus::prelude::*;

use super::use_hub;
use crate::browser;

/// Title bar with the mobile menu toggle and the "open in new tab" action.
#[component]
pub fn Header(on_toggle_menu: EventHandler<()>) -> Element {
    let mut hub = use_hub();
    let (title, external) = {
        let nav = hub.read();
        (nav.view().title().to_owned(), nav.view().external_link().map(ToOwned::to_owned))
    };

    rsx! {
        header { class: "header",
            button {
                class: "menu-toggle",
                "aria-label": "Toggle navigation",
                onclick: move |_| on_toggle_menu.call(()),
                "☰"
            }
            h2 {
                class: "current-site-title",
                onclick: move |_| hub.write().load_home_page(),
                "{title}"
            }
            if let Some(url) = external {
                button {
                    class: "open-new-tab",
                    title: "Open in new tab",
                    onclick: move |_| browser::open_external(&url),
                    "Open in new tab ↗"
                }
            }
        }
    }
}
