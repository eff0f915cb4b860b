pub use crate::catalog::{Issue, Severity, load_catalog, parse_catalog, parse_document, validate};
pub use crate::error::{KernelError, KernelErrorExt};
pub use crate::location::{Location, MemoryLocation};
pub use crate::navigator::{MessageOutcome, Navigator};
pub use crate::origin::OriginPolicy;
pub use crate::sidebar::{NavEntry, NavGroup};
pub use crate::view::{Content, Screen, View};
pub use phub_domain::catalog::{Catalog, Group, Site};
pub use phub_domain::config::HubConfig;
pub use phub_domain::message::FrameMessage;
pub use phub_domain::selection::Selection;
