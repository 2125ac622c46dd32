//! Flow configuration
//!
//! Configuration options for a `PermissionFlow`.

/// Configuration for a `PermissionFlow`
///
/// Use the builder pattern:
///
/// ```ignore
/// let config = FlowConfig::new()
///     .with_allow_label("Allow")
///     .with_settings_label("Open Settings");
/// ```
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// Accept-button label for the rationale dialog that precedes the
    /// standard permission prompt
    pub allow_label: String,

    /// Accept-button label for rationale dialogs that lead to a Settings
    /// screen
    pub settings_label: String,
}

impl FlowConfig {
    /// Create a configuration with the default labels
    pub fn new() -> Self {
        Self {
            allow_label: "Allow".to_string(),
            settings_label: "Go to Settings".to_string(),
        }
    }

    /// Set the accept label for the pre-prompt rationale dialog
    pub fn with_allow_label(mut self, label: impl Into<String>) -> Self {
        self.allow_label = label.into();
        self
    }

    /// Set the accept label for Settings-redirect rationale dialogs
    pub fn with_settings_label(mut self, label: impl Into<String>) -> Self {
        self.settings_label = label.into();
        self
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FlowConfig::default();
        assert_eq!(config.allow_label, "Allow");
        assert_eq!(config.settings_label, "Go to Settings");
    }

    #[test]
    fn test_builder() {
        let config = FlowConfig::new()
            .with_allow_label("允许")
            .with_settings_label("去设置");
        assert_eq!(config.allow_label, "允许");
        assert_eq!(config.settings_label, "去设置");
    }
}
