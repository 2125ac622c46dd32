//! Rationale gating
//!
//! Decides whether an explanatory dialog precedes the platform prompt. The
//! platform's `can_show` predicate is a black box: it is false both for
//! never-asked permissions (on some platform generations) and for
//! permanently denied ones, and the gate does not try to tell them apart.

use crate::core::Permission;

/// Whether a rationale dialog should precede the permission prompt
///
/// True only if there is rationale text to show AND the platform would still
/// honor a rationale for at least one requested permission.
pub fn should_show_rationale<F>(permissions: &[Permission], rationale: &str, can_show: F) -> bool
where
    F: Fn(&Permission) -> bool,
{
    if rationale.is_empty() {
        return false;
    }
    permissions.iter().any(|p| can_show(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perms(names: &[&str]) -> Vec<Permission> {
        Permission::list(names.iter().copied()).unwrap()
    }

    #[test]
    fn test_empty_text_never_shows() {
        assert!(!should_show_rationale(&perms(&["a", "b"]), "", |_| true));
    }

    #[test]
    fn test_shows_when_any_permission_eligible() {
        let set = perms(&["a", "b"]);
        assert!(should_show_rationale(&set, "we need these", |p| {
            p.as_str() == "b"
        }));
    }

    #[test]
    fn test_no_eligible_permission_skips_dialog() {
        let set = perms(&["a", "b"]);
        assert!(!should_show_rationale(&set, "we need these", |_| false));
    }
}
