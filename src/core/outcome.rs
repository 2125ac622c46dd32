//! Terminal request outcomes
//!
//! Every request session ends in exactly one of the three outcomes below.
//! Denials are outcomes, not errors.

use serde::{Deserialize, Serialize};

use super::permission::Permission;

/// The three-way terminal result of a permission request session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Every requested permission is granted
    AllGranted,

    /// At least one permission was denied
    ///
    /// Carries all denied permissions, in request order.
    SomeDenied(Vec<Permission>),

    /// At least one denied permission is permanently denied
    ///
    /// Carries ALL denied permissions, not only the permanently-denied
    /// subset, in request order. This mirrors the platform's ambiguity: once
    /// anything is permanent the caller has to go through Settings anyway.
    SomePermanentlyDenied(Vec<Permission>),
}

impl Outcome {
    /// Whether the session ended with everything granted
    pub fn is_granted(&self) -> bool {
        matches!(self, Outcome::AllGranted)
    }

    /// The denied permissions, empty for `AllGranted`
    pub fn denied_permissions(&self) -> &[Permission] {
        match self {
            Outcome::AllGranted => &[],
            Outcome::SomeDenied(denied) | Outcome::SomePermanentlyDenied(denied) => denied,
        }
    }
}

/// The caller-supplied outcome handler, invoked at most once per session
pub type OutcomeCallback = Box<dyn FnOnce(Outcome) + Send + 'static>;
