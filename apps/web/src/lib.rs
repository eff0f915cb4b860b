//! Browser shell for the hub.
//!
//! Fetches the catalog once, then hands every UI event to a
//! [`phub::kernel::navigator::Navigator`] and renders its [`phub::prelude::Screen`].

pub mod browser;
pub mod components;
pub mod listeners;
pub mod loader;

pub use crate::components::App;

/// Mounts [`App`] into the page.
pub fn launch() {
    dioxus::launch(App);
}
