mod content;
mod header;
mod hub;
mod sidebar;

pub use content::ContentArea;
pub use header::Header;
pub use hub::{App, Hub, HubState, use_hub};
pub use sidebar::Sidebar;
