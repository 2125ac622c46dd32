//! Permission identifiers
//!
//! A permission is an opaque capability name defined by the host platform
//! (e.g. `android.permission.CAMERA`). The only validation is non-emptiness;
//! what the name means is entirely the platform's business.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{PermissionError, PermissionResult};

/// Name reported when the install-unknown-apps grant is denied
pub const REQUEST_INSTALL_PACKAGES: &str = "android.permission.REQUEST_INSTALL_PACKAGES";

/// Name reported when the draw-overlay grant is denied
pub const SYSTEM_ALERT_WINDOW: &str = "android.permission.SYSTEM_ALERT_WINDOW";

/// An opaque platform permission name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission(String);

impl Permission {
    /// Create a permission from a capability name
    ///
    /// The empty string is rejected; duplicates and unknown names are the
    /// platform's problem, not ours.
    pub fn new(name: impl Into<String>) -> PermissionResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(PermissionError::EmptyPermissionName);
        }
        Ok(Self(name))
    }

    /// The underlying capability name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build a full permission list, failing if any name is empty
    ///
    /// Nothing is constructed partially: one bad name fails the whole list.
    pub fn list<I, S>(names: I) -> PermissionResult<Vec<Self>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(Self::new).collect()
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Permission {
    type Error = PermissionError;

    fn try_from(name: &str) -> PermissionResult<Self> {
        Self::new(name)
    }
}

impl TryFrom<String> for Permission {
    type Error = PermissionError;

    fn try_from(name: String) -> PermissionResult<Self> {
        Self::new(name)
    }
}
