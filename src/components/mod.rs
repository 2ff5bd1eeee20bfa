//! Components rendered into every page by the web shell.
//!
//! The [`Sidebar`] is a pure function of the current path and the trending tags
//! the feed holds, so re-rendering it never touches the network.

mod sidebar;
pub use sidebar::{Sidebar, QUIET_PLACEHOLDER};
