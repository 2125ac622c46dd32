//! Platform grant-state predicates
//!
//! Pure, synchronous queries implemented by the host. The engine treats
//! every predicate as a black box. In particular `can_show_rationale`
//! encodes the platform's permanent-denial convention: once a permission is
//! denied, `false` means the user said "don't ask again".

use crate::core::Permission;

/// Synchronous, side-effect-free view of the platform's grant state
pub trait PlatformState: Send + Sync {
    /// Whether the platform has a runtime-permission model at all
    ///
    /// Platforms predating the model treat every permission as granted and
    /// the engine short-circuits without any UI.
    fn supports_runtime_permissions(&self) -> bool {
        true
    }

    /// Whether installing from unknown sources needs a grant on this platform
    ///
    /// Older platforms never restricted it; they report `false` here and the
    /// install query short-circuits to granted.
    fn restricts_unknown_app_installs(&self) -> bool {
        true
    }

    /// Whether drawing over other apps needs a grant on this platform
    fn restricts_overlays(&self) -> bool {
        true
    }

    /// Whether `permission` is currently granted
    fn is_granted(&self, permission: &Permission) -> bool;

    /// Whether the system would still show its own rationale UI for
    /// `permission`
    fn can_show_rationale(&self, permission: &Permission) -> bool;

    /// OS query for the install-unknown-apps grant
    fn can_request_package_installs(&self) -> bool;

    /// OS query for the draw-overlay grant
    fn can_draw_overlays(&self) -> bool;
}
