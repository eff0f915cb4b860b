//! The navigation controller.
//!
//! [`Navigator`] owns the catalog and the current [`Selection`], and keeps the
//! [`View`] and the [`Location`] in step with it. Every UI event maps to one method:
//!
//! | event                          | method                        |
//! |--------------------------------|-------------------------------|
//! | page ready                     | [`Navigator::start`]          |
//! | brand / mobile title click     | [`Navigator::load_home_page`] |
//! | sidebar site click             | [`Navigator::load_site`]      |
//! | group header click             | [`Navigator::load_group`]     |
//! | back / forward (`popstate`)    | [`Navigator::restore`]        |
//! | `message` from a framed page   | [`Navigator::handle_message`] |
//! | frame `load` / `error`         | [`Navigator::frame_loaded`] / [`Navigator::frame_failed`] |

use crate::location::Location;
use crate::origin::OriginPolicy;
use crate::query;
use crate::sidebar;
use crate::view::View;
use phub_domain::catalog::Catalog;
use phub_domain::config::HubConfig;
use phub_domain::message::FrameMessage;
use phub_domain::selection::Selection;
use tracing::{debug, info, warn};

/// How a navigation is recorded in the session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Record {
    /// New entry (user navigation).
    Push,
    /// Rewrite the current entry (startup and back/forward).
    Replace,
}

/// Result of an inbound cross-frame message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageOutcome {
    /// The request switched the hub to the site.
    Navigated(String),
    /// The request named a site that is not in the catalog.
    UnknownSite(String),
    /// The sender's origin is not on the allow-list.
    Rejected,
    /// The payload does not match any known message.
    Ignored,
}

/// Explicit controller state for the hub shell.
#[derive(Debug)]
pub struct Navigator<V, L> {
    catalog: Catalog,
    config: HubConfig,
    policy: OriginPolicy,
    selection: Selection,
    frame_url: Option<String>,
    view: V,
    location: L,
}

impl<V: View, L: Location> Navigator<V, L> {
    /// Creates a navigator using the settings embedded in the catalog.
    ///
    /// Nothing is rendered until [`Navigator::start`] is called.
    pub fn new(catalog: Catalog, view: V, location: L) -> Self {
        let config = catalog.hub.clone();
        let policy = OriginPolicy::new(&location.origin(), &config);
        Self { catalog, config, policy, selection: Selection::Home, frame_url: None, view, location }
    }

    /// Replaces the hub settings (e.g. with a file loaded by native tooling).
    #[must_use]
    pub fn with_config(mut self, config: HubConfig) -> Self {
        self.policy = OriginPolicy::new(&self.location.origin(), &config);
        self.config = config;
        self
    }

    /// Renders the sidebar and shows whatever the current URL asks for.
    ///
    /// An unknown identifier in the URL falls back to Home, and the URL is rewritten
    /// to match.
    pub fn start(&mut self) {
        let groups = sidebar::build(&self.catalog);
        self.view.render_sidebar(&groups);

        let requested = query::parse(&self.location.search());
        info!(requested = %requested, groups = groups.len(), "Hub started");
        self.apply(&requested, Record::Replace);
    }

    /// Re-applies the current URL without adding a history entry.
    ///
    /// Call after the location changed underneath the hub (back/forward).
    pub fn restore(&mut self) {
        let requested = query::parse(&self.location.search());
        debug!(requested = %requested, "Restoring from location");
        self.apply(&requested, Record::Replace);
    }

    /// Shows the home page and clears the URL parameters.
    pub fn load_home_page(&mut self) {
        self.show_home(Record::Push);
    }

    /// Shows a site. Unknown identifiers are ignored and the current view is kept.
    ///
    /// Returns `true` if the site was loaded.
    pub fn load_site(&mut self, id: &str) -> bool {
        self.show_site(id, Record::Push)
    }

    /// Shows a group's own page. Ignored for unknown groups and groups without a URL.
    ///
    /// Returns `true` if the group was loaded.
    pub fn load_group(&mut self, id: &str) -> bool {
        self.show_group(id, Record::Push)
    }

    /// Resolves an identifier: site first, then navigable group, else Home.
    #[must_use]
    pub fn resolve(&self, id: &str) -> Selection {
        if self.catalog.site(id).is_some() {
            return Selection::Site(id.to_owned());
        }
        match self.catalog.group(id) {
            Some(group) if group.is_navigable() => Selection::Group(id.to_owned()),
            _ => Selection::Home,
        }
    }

    /// Acts on a message posted by framed content.
    ///
    /// The sender must pass the [`OriginPolicy`]; the payload must be a [`FrameMessage`].
    pub fn handle_message(&mut self, origin: &str, payload: &serde_json::Value) -> MessageOutcome {
        if !self.policy.permits(origin) {
            warn!(origin = %origin, "Rejected message from origin outside the allow-list");
            return MessageOutcome::Rejected;
        }

        let Ok(message) = serde_json::from_value::<FrameMessage>(payload.clone()) else {
            debug!(origin = %origin, "Ignoring message with unknown shape");
            return MessageOutcome::Ignored;
        };

        match message {
            FrameMessage::Navigate { site_id } => {
                if self.load_site(&site_id) {
                    MessageOutcome::Navigated(site_id)
                } else {
                    MessageOutcome::UnknownSite(site_id)
                }
            },
        }
    }

    /// The frame finished loading; hides the indicator.
    pub fn frame_loaded(&mut self) {
        if self.frame_url.is_some() {
            self.view.frame_ready();
        }
    }

    /// The frame reported an error (same-origin content only); falls back to a link.
    pub fn frame_failed(&mut self) {
        if let Some(url) = self.frame_url.take() {
            warn!(url = %url, "Embedded content failed to load, showing fallback");
            self.view.show_fallback(&url);
        }
    }

    /// URL of the current selection, for the "open in new tab" action.
    #[must_use]
    pub fn external_url(&self) -> Option<&str> {
        match &self.selection {
            Selection::Home => None,
            Selection::Site(id) => self.catalog.site(id).map(|site| site.url.as_str()),
            Selection::Group(id) => self.catalog.group(id).and_then(|group| group.url.as_deref()),
        }
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn config(&self) -> &HubConfig {
        &self.config
    }

    #[must_use]
    pub const fn policy(&self) -> &OriginPolicy {
        &self.policy
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    #[must_use]
    pub const fn location(&self) -> &L {
        &self.location
    }

    /// Mutable access to the location, e.g. to step through history in tests.
    pub const fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    fn apply(&mut self, requested: &Selection, record: Record) {
        let target = match requested {
            Selection::Home => Selection::Home,
            Selection::Site(id) | Selection::Group(id) => self.resolve(id),
        };

        let shown = match &target {
            Selection::Home => false,
            Selection::Site(id) => self.show_site(id, record),
            Selection::Group(id) => self.show_group(id, record),
        };

        if !shown {
            if !requested.is_home() {
                debug!(requested = %requested, "Requested target not found, falling back to home");
            }
            self.show_home(record);
        }
    }

    fn show_home(&mut self, record: Record) {
        self.selection = Selection::Home;
        self.commit(record);

        self.view.set_active(&self.selection);
        self.view.set_title(&self.config.title);
        self.view.set_external_link(None);
        self.embed(self.config.home_url.clone());

        debug!("Home page loaded");
    }

    fn show_site(&mut self, id: &str, record: Record) -> bool {
        let Some(site) = self.catalog.site(id).cloned() else {
            debug!(site = %id, "Ignoring unknown site");
            return false;
        };

        self.selection = Selection::Site(site.id.clone());
        self.commit(record);

        self.view.set_active(&self.selection);
        self.view.set_title(&site.label);
        self.view.set_external_link(Some(&site.url));
        if site.embed {
            self.embed(site.url);
        } else {
            self.frame_url = None;
            self.view.show_fallback(&site.url);
        }

        info!(site = %site.id, embed = site.embed, "Site loaded");
        true
    }

    fn show_group(&mut self, id: &str, record: Record) -> bool {
        let Some((group_id, name, url)) = self
            .catalog
            .group(id)
            .and_then(|g| g.url.clone().map(|url| (g.id.clone(), g.name.clone(), url)))
        else {
            debug!(group = %id, "Ignoring unknown or non-navigable group");
            return false;
        };

        self.selection = Selection::Group(group_id);
        self.commit(record);

        self.view.set_active(&self.selection);
        self.view.set_title(&name);
        self.view.set_external_link(Some(&url));
        self.embed(url);

        info!(group = %id, "Group loaded");
        true
    }

    /// Points the frame at `url`. A frame already showing `url` is left alone, since
    /// re-setting the same source neither reloads it nor fires another load event.
    fn embed(&mut self, url: String) {
        if self.frame_url.as_deref() == Some(url.as_str()) {
            return;
        }
        self.view.show_frame(&url);
        self.frame_url = Some(url);
    }

    /// Writes the selection into the location unless it already says the same thing.
    fn commit(&mut self, record: Record) {
        let search = query::render(&self.selection);
        if self.location.search() == search {
            return;
        }
        match record {
            Record::Push => self.location.push(&search),
            Record::Replace => self.location.replace(&search),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::MemoryLocation;
    use crate::view::{Content, Screen};
    use phub_domain::catalog::{Group, Site};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Group {
                id: "g1".into(),
                name: "Group One".into(),
                url: None,
                sites: vec![Site {
                    id: "s1".into(),
                    label: "Site One".into(),
                    description: "first".into(),
                    url: "/a".into(),
                    embed: true,
                }],
            },
            Group {
                id: "g2".into(),
                name: "Group Two".into(),
                url: Some("/groups/two/".into()),
                sites: vec![Site {
                    id: "ext".into(),
                    label: "External".into(),
                    description: String::new(),
                    url: "https://example.com".into(),
                    embed: false,
                }],
            },
        ])
    }

    fn navigator(search: &str) -> Navigator<Screen, MemoryLocation> {
        let mut nav = Navigator::new(
            catalog(),
            Screen::default(),
            MemoryLocation::default().with_search(search),
        );
        nav.start();
        nav
    }

    #[test]
    fn start_with_site_query_shows_embedded_site() {
        let nav = navigator("?site=s1");
        let screen = nav.view();

        assert_eq!(nav.selection(), &Selection::Site("s1".into()));
        assert_eq!(screen.content(), &Content::Embedded { url: "/a".into(), loading: true });
        assert_eq!(screen.title(), "Site One");
        assert!(screen.is_site_active("s1"));
        assert_eq!(screen.sidebar().len(), 2);
        assert_eq!(nav.location().entries(), ["?site=s1"]);
    }

    #[test]
    fn start_with_unknown_site_falls_back_home_and_rewrites_url() {
        let nav = navigator("?site=unknown");

        assert!(nav.selection().is_home());
        assert_eq!(nav.view().title(), "Projects Hub");
        assert_eq!(nav.view().content().url(), Some("./sites/home/"));
        assert_eq!(nav.location().entries(), [""]);
    }

    #[test]
    fn non_embeddable_site_shows_fallback() {
        let mut nav = navigator("");
        assert!(nav.load_site("ext"));

        assert_eq!(nav.view().content(), &Content::Fallback { url: "https://example.com".into() });
        assert_eq!(nav.view().external_link(), Some("https://example.com"));
        assert_eq!(nav.external_url(), Some("https://example.com"));
    }

    #[test]
    fn group_without_url_is_a_no_op() {
        let mut nav = navigator("?site=s1");
        let before = nav.view().clone();

        assert!(!nav.load_group("g1"));
        assert!(!nav.load_group("missing"));
        assert_eq!(nav.view(), &before);
        assert_eq!(nav.location().search(), "?site=s1");
    }

    #[test]
    fn group_with_url_is_embedded_and_highlighted() {
        let mut nav = navigator("");
        assert!(nav.load_group("g2"));

        assert_eq!(nav.location().search(), "?group=g2");
        assert!(nav.view().is_group_active("g2"));
        assert_eq!(nav.view().title(), "Group Two");
        assert_eq!(nav.external_url(), Some("/groups/two/"));
    }

    #[test]
    fn frame_events_drive_indicator_and_fallback() {
        let mut nav = navigator("?site=s1");
        nav.frame_loaded();
        assert_eq!(nav.view().content(), &Content::Embedded { url: "/a".into(), loading: false });

        nav.frame_failed();
        assert_eq!(nav.view().content(), &Content::Fallback { url: "/a".into() });

        // A second error after falling back has nothing left to replace.
        nav.frame_failed();
        assert_eq!(nav.view().content(), &Content::Fallback { url: "/a".into() });
    }

    #[test]
    fn repeated_navigation_does_not_duplicate_history() {
        let mut nav = navigator("");
        nav.load_site("s1");
        nav.load_site("s1");
        nav.load_home_page();

        assert_eq!(nav.location().entries(), ["", "?site=s1", ""]);
    }

    #[test]
    fn renavigating_to_the_framed_url_keeps_the_frame_state() {
        let mut nav = navigator("?site=s1");
        nav.frame_loaded();

        assert!(nav.load_site("s1"));
        assert_eq!(nav.view().content(), &Content::Embedded { url: "/a".into(), loading: false });
        assert_eq!(nav.location().entries(), ["?site=s1"]);

        nav.load_home_page();
        nav.frame_loaded();
        nav.load_home_page();
        nav.restore();
        assert_eq!(
            nav.view().content(),
            &Content::Embedded { url: "./sites/home/".into(), loading: false }
        );
    }

    #[test]
    fn group_sharing_the_framed_url_does_not_rearm_the_indicator() {
        let mut catalog = catalog();
        catalog.groups[1].url = Some("/a".into());
        let mut nav =
            Navigator::new(catalog, Screen::default(), MemoryLocation::default().with_search("?site=s1"));
        nav.start();
        nav.frame_loaded();

        assert!(nav.load_group("g2"));
        assert_eq!(nav.view().title(), "Group Two");
        assert_eq!(nav.view().content(), &Content::Embedded { url: "/a".into(), loading: false });
    }

    #[test]
    fn fallback_then_same_url_embeds_again() {
        let mut nav = navigator("?site=s1");
        nav.frame_failed();
        assert!(nav.load_site("s1"));
        assert_eq!(nav.view().content(), &Content::Embedded { url: "/a".into(), loading: true });
    }

    #[test]
    fn resolve_prefers_sites_then_navigable_groups() {
        let nav = navigator("");
        assert_eq!(nav.resolve("s1"), Selection::Site("s1".into()));
        assert_eq!(nav.resolve("g2"), Selection::Group("g2".into()));
        assert_eq!(nav.resolve("g1"), Selection::Home);
        assert_eq!(nav.resolve("nope"), Selection::Home);
    }
}
