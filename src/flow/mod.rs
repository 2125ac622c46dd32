//! Request orchestration
//!
//! This module owns the decision tree that routes a request through "ask
//! directly," "show a rationale first," or "send the user to Settings":
//! - `PermissionFlow` - the public request API and per-session driver
//! - `query` - grant-state predicates with legacy-platform short-circuits
//! - `rationale` - pre-prompt dialog gating
//! - `reducer` - grant-vector to terminal-outcome reduction

pub mod config;
pub mod engine;
pub mod query;
pub mod rationale;
pub mod reducer;

pub use config::FlowConfig;
pub use engine::PermissionFlow;
