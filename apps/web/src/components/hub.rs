use dioxus::prelude::*;
use phub::prelude::{Catalog, Navigator, Screen};
use tracing::error;

use super::{ContentArea, Header, Sidebar};
use crate::browser::{self, BrowserLocation};
use crate::listeners::{use_history_listener, use_message_listener};
use crate::loader;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// The navigator shared by every hub component.
pub type HubState = Signal<Navigator<Screen, BrowserLocation>>;

/// Returns the hub's navigator from context.
#[must_use]
pub fn use_hub() -> HubState {
    use_context()
}

/// Root component: loads the catalog, then shows the hub.
///
/// A failed load is logged and nothing is rendered.
#[component]
pub fn App() -> Element {
    let catalog = use_resource(|| async move { loader::fetch_catalog(&browser::page_url()).await });

    let body = match &*catalog.read_unchecked() {
        Some(Ok(catalog)) => rsx! { Hub { catalog: catalog.clone() } },
        Some(Err(err)) => {
            error!(error = ?err, "Failed to initialize hub");
            rsx! {}
        },
        None => rsx! {},
    };

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        {body}
    }
}

/// The hub shell for a loaded catalog.
#[component]
pub fn Hub(catalog: Catalog) -> Element {
    let hub: HubState = use_context_provider(|| {
        let mut nav = Navigator::new(catalog, Screen::default(), BrowserLocation);
        nav.start();
        Signal::new(nav)
    });
    let mut menu_open = use_signal(|| false);

    use_message_listener(hub);
    use_history_listener(hub);

    let title = hub.read().view().title().to_owned();
    let layout = if menu_open() { "hub menu-open" } else { "hub" };

    rsx! {
        document::Title { "{title}" }
        div { class: layout,
            Sidebar { on_close: move |_| menu_open.set(false) }
            div {
                class: "sidebar-overlay",
                onclick: move |_| menu_open.set(false),
            }
            main { class: "main",
                Header { on_toggle_menu: move |_| menu_open.set(!menu_open()) }
                ContentArea {}
            }
        }
    }
}
