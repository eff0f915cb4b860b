//! The rendering seam between the navigator and a concrete surface.

use crate::sidebar::NavGroup;
use phub_domain::selection::Selection;

/// Output port of the [`Navigator`](crate::navigator::Navigator).
///
/// Every method is a full replacement of one piece of visible state; the navigator
/// never asks the view what it currently shows.
pub trait View {
    /// Draws the sidebar. Called once, at startup.
    fn render_sidebar(&mut self, groups: &[NavGroup]);

    /// Sets the header title.
    fn set_title(&mut self, title: &str);

    /// Highlights the selected sidebar item and clears every other highlight.
    fn set_active(&mut self, selection: &Selection);

    /// Shows the "open in new tab" action for `url`, or hides it.
    fn set_external_link(&mut self, url: Option<&str>);

    /// Switches to embedded mode and starts loading `url` with the indicator visible.
    fn show_frame(&mut self, url: &str);

    /// Hides the loading indicator once the frame reports `load`.
    fn frame_ready(&mut self);

    /// Switches to fallback mode, offering `url` as an external link.
    fn show_fallback(&mut self, url: &str);
}

/// What the content area displays. Only one mode is visible at a time.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Nothing loaded yet.
    #[default]
    Blank,
    /// The frame shows `url`; `loading` drives the indicator.
    Embedded { url: String, loading: bool },
    /// The frame is hidden and `url` is offered as an external link.
    Fallback { url: String },
}

impl Content {
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Blank => None,
            Self::Embedded { url, .. } | Self::Fallback { url } => Some(url),
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Embedded { loading: true, .. })
    }
}

/// Plain-data [`View`]: records what should be on screen.
///
/// The web shell renders straight from it, and tests assert against it.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    sidebar: Vec<NavGroup>,
    title: String,
    active: Selection,
    external_link: Option<String>,
    content: Content,
}

impl Screen {
    #[must_use]
    pub fn sidebar(&self) -> &[NavGroup] {
        &self.sidebar
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn active(&self) -> &Selection {
        &self.active
    }

    #[must_use]
    pub fn is_site_active(&self, id: &str) -> bool {
        self.active.site_id() == Some(id)
    }

    #[must_use]
    pub fn is_group_active(&self, id: &str) -> bool {
        self.active.group_id() == Some(id)
    }

    #[must_use]
    pub fn external_link(&self) -> Option<&str> {
        self.external_link.as_deref()
    }

    #[must_use]
    pub const fn content(&self) -> &Content {
        &self.content
    }
}

impl View for Screen {
    fn render_sidebar(&mut self, groups: &[NavGroup]) {
        self.sidebar = groups.to_vec();
    }

    fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
    }

    fn set_active(&mut self, selection: &Selection) {
        self.active = selection.clone();
    }

    fn set_external_link(&mut self, url: Option<&str>) {
        self.external_link = url.map(ToOwned::to_owned);
    }

    fn show_frame(&mut self, url: &str) {
        self.content = Content::Embedded { url: url.to_owned(), loading: true };
    }

    fn frame_ready(&mut self) {
        if let Content::Embedded { loading, .. } = &mut self.content {
            *loading = false;
        }
    }

    fn show_fallback(&mut self, url: &str) {
        self.content = Content::Fallback { url: url.to_owned() };
    }
}
