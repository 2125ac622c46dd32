//! Core types for the permission flow library
//!
//! This module provides the fundamental types used throughout the crate:
//! - `Permission` - Opaque platform capability names
//! - `Outcome` / `OutcomeCallback` - Terminal results and their handler
//! - `RequestMode` / `SettingsScreen` - Per-session routing
//! - `PermissionError` - Error types

pub mod error;
pub mod outcome;
pub mod permission;
pub mod request;

pub use error::{PermissionError, PermissionResult};
pub use outcome::{Outcome, OutcomeCallback};
pub use permission::{Permission, REQUEST_INSTALL_PACKAGES, SYSTEM_ALERT_WINDOW};
pub use request::{RequestMode, SettingsScreen};
