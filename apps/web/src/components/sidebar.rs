use dioxus::prelude::*;
use phub::prelude::{NavEntry, NavGroup, Selection};

use super::use_hub;

/// Groups and sites in catalog order. Selecting anything calls `on_close`
/// so the mobile drawer folds away.
#[component]
pub fn Sidebar(on_close: EventHandler<()>) -> Element {
    let mut hub = use_hub();
    let (groups, active, brand) = {
        let nav = hub.read();
        (nav.view().sidebar().to_vec(), nav.view().active().clone(), nav.config().title.clone())
    };

    rsx! {
        aside { class: "sidebar",
            div {
                class: "sidebar-header",
                onclick: move |_| {
                    hub.write().load_home_page();
                    on_close.call(());
                },
                h1 { "{brand}" }
            }
            nav { class: "sidebar-nav",
                for group in groups {
                    GroupBlock {
                        key: "{group.id}",
                        group: group.clone(),
                        active: active.clone(),
                        on_close,
                    }
                }
            }
        }
    }
}

#[component]
fn GroupBlock(group: NavGroup, active: Selection, on_close: EventHandler<()>) -> Element {
    let mut hub = use_hub();
    let group_id = group.id.clone();
    let header_class = match (group.navigable, active.group_id() == Some(group.id.as_str())) {
        (true, true) => "nav-group-header navigable active",
        (true, false) => "nav-group-header navigable",
        (false, _) => "nav-group-header",
    };

    rsx! {
        div { class: "nav-group",
            if group.navigable {
                div {
                    class: header_class,
                    onclick: move |_| {
                        if hub.write().load_group(&group_id) {
                            on_close.call(());
                        }
                    },
                    span { "{group.name}" }
                }
            } else {
                div { class: header_class,
                    span { "{group.name}" }
                }
            }
            div { class: "nav-group-sites",
                for entry in group.entries.iter().cloned() {
                    SiteItem {
                        key: "{entry.id}",
                        active: active.site_id() == Some(entry.id.as_str()),
                        entry: entry.clone(),
                        on_close,
                    }
                }
            }
        }
    }
}

#[component]
fn SiteItem(entry: NavEntry, active: bool, on_close: EventHandler<()>) -> Element {
    let mut hub = use_hub();
    let site_id = entry.id.clone();
    let class = if active { "site-item active" } else { "site-item" };

    rsx! {
        div {
            class,
            onclick: move |_| {
                hub.write().load_site(&site_id);
                on_close.call(());
            },
            span { class: "site-label", "{entry.label}" }
            if !entry.description.is_empty() {
                span { class: "site-description", "{entry.description}" }
            }
        }
    }
}
