//! Outcome reduction
//!
//! Collapses a raw per-permission grant vector into the three-way terminal
//! outcome.

use crate::core::{Outcome, Permission};

/// Reduce ordered `(permission, granted)` pairs to a terminal outcome
///
/// `is_permanently_denied` is consulted only for denied permissions, after
/// the grant vector is known; by platform convention a denied permission
/// that can no longer show a system rationale is permanent.
///
/// When any denied permission is permanent, the outcome carries the FULL
/// denied set, not only the permanent subset. The denied set preserves the
/// input (request) order.
pub fn reduce<F>(results: &[(Permission, bool)], is_permanently_denied: F) -> Outcome
where
    F: Fn(&Permission) -> bool,
{
    let denied: Vec<Permission> = results
        .iter()
        .filter(|(_, granted)| !granted)
        .map(|(permission, _)| permission.clone())
        .collect();

    if denied.is_empty() {
        return Outcome::AllGranted;
    }

    if denied.iter().any(|p| is_permanently_denied(p)) {
        Outcome::SomePermanentlyDenied(denied)
    } else {
        Outcome::SomeDenied(denied)
    }
}
