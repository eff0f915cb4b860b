//! Facade crate for the Projects Hub shell.
//! Re-exports domain/kernel primitives so applications depend on a single crate.
//! Keep this crate thin: it should compose other crates, not implement navigation logic.
//!
//! ## Usage
//! - Build a [`kernel::navigator::Navigator`] from a catalog, a view and a location.
//! - Use [`prelude`] in applications for the common names.

pub use phub_domain as domain;
pub use phub_kernel as kernel;

pub mod prelude {
    pub use phub_kernel::prelude::*;
}

/// Name and version baked in at build time, for logs and `--version` banners.
pub const BUILD: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));
