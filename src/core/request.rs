//! Request modes and Settings destinations

use serde::{Deserialize, Serialize};

/// How a request session is routed through the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestMode {
    /// Standard runtime permission prompt
    RuntimePermissions,

    /// The "install unknown apps" grant; Settings-redirect only
    InstallUnknownApps,

    /// The "draw over other apps" grant; Settings-redirect only
    DrawOverlays,

    /// Send the user to the app's details page, typically after a permanent
    /// denial left Settings as the only way back
    OpenAppSettings,
}

impl RequestMode {
    /// The Settings destination for the Settings-redirect modes
    ///
    /// `None` means the mode uses the standard permission prompt instead.
    pub fn settings_screen(&self) -> Option<SettingsScreen> {
        match self {
            RequestMode::RuntimePermissions => None,
            RequestMode::InstallUnknownApps => Some(SettingsScreen::ManageUnknownAppSources),
            RequestMode::DrawOverlays => Some(SettingsScreen::ManageOverlay),
            RequestMode::OpenAppSettings => Some(SettingsScreen::AppDetails),
        }
    }
}

/// System Settings screens the flow can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingsScreen {
    /// The per-app "install unknown apps" toggle
    ManageUnknownAppSources,

    /// The per-app "display over other apps" toggle
    ManageOverlay,

    /// The app's details page with the full permission list
    AppDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_screen_routing() {
        assert_eq!(RequestMode::RuntimePermissions.settings_screen(), None);
        assert_eq!(
            RequestMode::InstallUnknownApps.settings_screen(),
            Some(SettingsScreen::ManageUnknownAppSources)
        );
        assert_eq!(
            RequestMode::DrawOverlays.settings_screen(),
            Some(SettingsScreen::ManageOverlay)
        );
        assert_eq!(
            RequestMode::OpenAppSettings.settings_screen(),
            Some(SettingsScreen::AppDetails)
        );
    }
}
