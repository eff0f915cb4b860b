//! Kernel of the hub shell: everything between the catalog and a rendering surface.
//! Keep this crate free of UI toolkits; surfaces plug in through [`view::View`] and
//! [`location::Location`].
//!
//! ## Driving the navigator
//! ```rust
//! use phub_kernel::prelude::*;
//!
//! let catalog = parse_catalog(r#"{ "groups": [
//!     { "id": "g1", "name": "Group", "sites": [
//!         { "id": "s1", "label": "Site", "description": "", "url": "/a", "embed": true }
//!     ]}
//! ]}"#).unwrap();
//!
//! let location = MemoryLocation::default().with_search("?site=s1");
//! let mut nav = Navigator::new(catalog, Screen::default(), location);
//! nav.start();
//!
//! assert_eq!(nav.view().title(), "Site");
//! assert_eq!(nav.view().content().url(), Some("/a"));
//! ```
//!
//! ## Settings loading (non-wasm)
//! ```rust,ignore
//! use phub_kernel::config::load_settings;
//! let cfg = load_settings("phub.toml")?;
//! ```
pub mod catalog;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod error;
pub mod location;
pub mod navigator;
pub mod origin;
pub mod prelude;
pub mod query;
pub mod sidebar;
pub mod view;

pub use phub_domain as domain;
