//! UI collaborator contract
//!
//! Each async method is a suspend point with exactly one resumption per
//! session; the host framework serializes its UI callbacks, so no two
//! resumptions for the same session are ever concurrently active.

use async_trait::async_trait;

use crate::core::{Permission, SettingsScreen};

/// The user's answer to a rationale dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RationaleChoice {
    /// The user accepted the explanation; proceed with the flow
    Accepted,
    /// The user declined; per-mode policy decides what happens next
    Declined,
}

/// The asynchronous UI hops of a request flow, implemented by the host
#[async_trait]
pub trait PermissionUi: Send + Sync {
    /// Display a modal explaining why the permissions are needed
    ///
    /// Resolves to exactly one choice, exactly once.
    async fn show_rationale(&self, text: &str, accept_label: &str) -> RationaleChoice;

    /// Run the platform permission prompt for the full requested set
    ///
    /// Returns the per-permission grant vector. Its order is not part of
    /// the contract; the engine reports denials in request order.
    async fn request_permissions(&self, permissions: &[Permission]) -> Vec<(Permission, bool)>;

    /// Navigate to a system Settings screen, best effort
    ///
    /// Resolves when the host regains control. There is no success signal;
    /// the engine re-queries grant state afterwards.
    async fn open_settings(&self, screen: SettingsScreen);
}
