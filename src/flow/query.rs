//! Grant-state predicates
//!
//! Thin, pure wrappers over `PlatformState` that fold in the "platform
//! predates the restriction" short-circuits. The engine calls these before
//! the platform flow (to skip it when everything is already held) and after
//! a Settings hop (to compute the result, since Settings has no callback).

use crate::core::{Permission, PermissionError, PermissionResult};
use crate::platform::PlatformState;

/// Whether every permission in the set currently reports granted
///
/// The empty set is a usage error, not vacuously true. Platforms without a
/// runtime-permission model report `true` unconditionally.
pub fn all_granted(
    platform: &dyn PlatformState,
    permissions: &[Permission],
) -> PermissionResult<bool> {
    if permissions.is_empty() {
        return Err(PermissionError::EmptyPermissionSet);
    }
    if !platform.supports_runtime_permissions() {
        return Ok(true);
    }
    Ok(permissions.iter().all(|p| platform.is_granted(p)))
}

/// Whether the app may install from unknown sources
pub fn has_install_unknown_apps(platform: &dyn PlatformState) -> bool {
    if !platform.restricts_unknown_app_installs() {
        return true;
    }
    platform.can_request_package_installs()
}

/// Whether the app may draw over other apps
pub fn has_draw_overlays(platform: &dyn PlatformState) -> bool {
    if !platform.restricts_overlays() {
        return true;
    }
    platform.can_draw_overlays()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct TestPlatform {
        granted: HashSet<String>,
        runtime_model: bool,
        restricts_installs: bool,
        restricts_overlays: bool,
        install_held: bool,
        overlay_held: bool,
    }

    impl TestPlatform {
        fn new() -> Self {
            Self {
                granted: HashSet::new(),
                runtime_model: true,
                restricts_installs: true,
                restricts_overlays: true,
                install_held: false,
                overlay_held: false,
            }
        }
    }

    impl PlatformState for TestPlatform {
        fn supports_runtime_permissions(&self) -> bool {
            self.runtime_model
        }

        fn restricts_unknown_app_installs(&self) -> bool {
            self.restricts_installs
        }

        fn restricts_overlays(&self) -> bool {
            self.restricts_overlays
        }

        fn is_granted(&self, permission: &Permission) -> bool {
            self.granted.contains(permission.as_str())
        }

        fn can_show_rationale(&self, _permission: &Permission) -> bool {
            true
        }

        fn can_request_package_installs(&self) -> bool {
            self.install_held
        }

        fn can_draw_overlays(&self) -> bool {
            self.overlay_held
        }
    }

    fn perms(names: &[&str]) -> Vec<Permission> {
        Permission::list(names.iter().copied()).unwrap()
    }

    #[test]
    fn test_all_granted() {
        let mut platform = TestPlatform::new();
        platform.granted.insert("a".into());
        platform.granted.insert("b".into());

        assert!(all_granted(&platform, &perms(&["a", "b"])).unwrap());
        assert!(!all_granted(&platform, &perms(&["a", "c"])).unwrap());
    }

    #[test]
    fn test_empty_set_is_usage_error() {
        let platform = TestPlatform::new();
        assert_eq!(
            all_granted(&platform, &[]).unwrap_err(),
            PermissionError::EmptyPermissionSet
        );
    }

    #[test]
    fn test_legacy_platform_always_granted() {
        let mut platform = TestPlatform::new();
        platform.runtime_model = false;

        // Nothing is in the granted set, but there is no model to ask.
        assert!(all_granted(&platform, &perms(&["a", "b"])).unwrap());
    }

    #[test]
    fn test_install_query() {
        let mut platform = TestPlatform::new();
        assert!(!has_install_unknown_apps(&platform));

        platform.install_held = true;
        assert!(has_install_unknown_apps(&platform));

        platform.install_held = false;
        platform.restricts_installs = false;
        assert!(has_install_unknown_apps(&platform));
    }

    #[test]
    fn test_overlay_query() {
        let mut platform = TestPlatform::new();
        assert!(!has_draw_overlays(&platform));

        platform.overlay_held = true;
        assert!(has_draw_overlays(&platform));

        platform.overlay_held = false;
        platform.restricts_overlays = false;
        assert!(has_draw_overlays(&platform));
    }
}
