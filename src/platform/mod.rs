//! Host collaborator contracts
//!
//! The flow engine never renders UI or talks to the OS itself. The host
//! supplies two collaborators:
//! - `PlatformState` - pure, synchronous grant-state predicates
//! - `PermissionUi` - the asynchronous dialog / prompt / Settings hops

pub mod state;
pub mod ui;

pub use state::PlatformState;
pub use ui::{PermissionUi, RationaleChoice};
