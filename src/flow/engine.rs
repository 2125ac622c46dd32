//! Request orchestration engine
//!
//! `PermissionFlow` owns the public request API. Each accepted request
//! registers its callback in the shared registry, then a detached task
//! drives the platform flow to completion:
//!
//! `Created -> (RationaleCheck) -> {DirectRequest | RationaleShown} ->
//! PlatformPending -> Resolved`
//!
//! The task suspends on the UI collaborator's async calls (the permission
//! prompt or the Settings hop) and resumes exactly once per suspend; the
//! terminal outcome is delivered through the registry, which makes delivery
//! idempotent per session.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::core::{
    Outcome, Permission, PermissionError, PermissionResult, RequestMode, SettingsScreen,
    REQUEST_INSTALL_PACKAGES, SYSTEM_ALERT_WINDOW,
};
use crate::platform::{PermissionUi, PlatformState, RationaleChoice};
use crate::registry::CallbackRegistry;

use super::config::FlowConfig;
use super::{query, rationale, reducer};

/// The public entry point for permission requests
///
/// Owns the callback registry and the two host collaborators. Cheap to
/// clone; clones share the same registry.
#[derive(Clone)]
pub struct PermissionFlow {
    registry: Arc<CallbackRegistry>,
    platform: Arc<dyn PlatformState>,
    ui: Arc<dyn PermissionUi>,
    config: FlowConfig,
}

impl PermissionFlow {
    /// Create a flow with the default configuration
    pub fn new(platform: Arc<dyn PlatformState>, ui: Arc<dyn PermissionUi>) -> Self {
        Self::with_config(platform, ui, FlowConfig::default())
    }

    /// Create a flow with an explicit configuration
    pub fn with_config(
        platform: Arc<dyn PlatformState>,
        ui: Arc<dyn PermissionUi>,
        config: FlowConfig,
    ) -> Self {
        Self {
            registry: Arc::new(CallbackRegistry::new()),
            platform,
            ui,
            config,
        }
    }

    /// The shared session registry, for host init/teardown wiring
    pub fn registry(&self) -> &Arc<CallbackRegistry> {
        &self.registry
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Whether every permission in the set is currently granted
    ///
    /// The empty set is a usage error, not vacuously true.
    pub fn has_permissions(&self, permissions: &[Permission]) -> PermissionResult<bool> {
        query::all_granted(self.platform.as_ref(), permissions)
    }

    /// Whether the app may install from unknown sources
    pub fn has_install_unknown_apps(&self) -> bool {
        query::has_install_unknown_apps(self.platform.as_ref())
    }

    /// Whether the app may draw over other apps
    pub fn has_draw_overlays(&self) -> bool {
        query::has_draw_overlays(self.platform.as_ref())
    }

    // =========================================================================
    // Requests
    // =========================================================================

    /// Request a set of runtime permissions
    ///
    /// `rationale` may be empty to skip the explanatory dialog. The callback
    /// fires exactly once with the terminal outcome; the returned id is the
    /// session's correlation key.
    pub fn request<F>(
        &self,
        permissions: Vec<Permission>,
        rationale: impl Into<String>,
        callback: F,
    ) -> PermissionResult<Uuid>
    where
        F: FnOnce(Outcome) + Send + 'static,
    {
        self.start(
            permissions,
            rationale.into(),
            RequestMode::RuntimePermissions,
            Box::new(callback),
        )
    }

    /// Request the "install unknown apps" grant via its Settings screen
    pub fn request_install_unknown_apps<F>(
        &self,
        rationale: impl Into<String>,
        callback: F,
    ) -> PermissionResult<Uuid>
    where
        F: FnOnce(Outcome) + Send + 'static,
    {
        // The session carries the well-known name so denial reporting
        // matches what the platform would call this grant.
        let permissions = vec![Permission::new(REQUEST_INSTALL_PACKAGES)?];
        self.start(
            permissions,
            rationale.into(),
            RequestMode::InstallUnknownApps,
            Box::new(callback),
        )
    }

    /// Request the "draw over other apps" grant via its Settings screen
    pub fn request_draw_overlays<F>(
        &self,
        rationale: impl Into<String>,
        callback: F,
    ) -> PermissionResult<Uuid>
    where
        F: FnOnce(Outcome) + Send + 'static,
    {
        let permissions = vec![Permission::new(SYSTEM_ALERT_WINDOW)?];
        self.start(
            permissions,
            rationale.into(),
            RequestMode::DrawOverlays,
            Box::new(callback),
        )
    }

    /// Send the user to the app's Settings details page
    ///
    /// Used after a permanent denial, when the normal prompt can no longer
    /// help. `permissions` is the set to re-check once the user comes back;
    /// there is no platform callback for this hop.
    pub fn open_app_settings<F>(
        &self,
        permissions: Vec<Permission>,
        rationale: impl Into<String>,
        callback: F,
    ) -> PermissionResult<Uuid>
    where
        F: FnOnce(Outcome) + Send + 'static,
    {
        self.start(
            permissions,
            rationale.into(),
            RequestMode::OpenAppSettings,
            Box::new(callback),
        )
    }

    fn start(
        &self,
        permissions: Vec<Permission>,
        rationale: String,
        mode: RequestMode,
        callback: crate::core::OutcomeCallback,
    ) -> PermissionResult<Uuid> {
        // Usage errors fail before anything is registered.
        if permissions.is_empty() {
            return Err(PermissionError::EmptyPermissionSet);
        }

        let id = self.registry.register(callback)?;
        tracing::info!(
            "[PermissionFlow] Session {} started ({:?}, {} permission(s))",
            id,
            mode,
            permissions.len()
        );

        let session = Session {
            id,
            permissions,
            rationale,
            mode,
        };
        let registry = Arc::clone(&self.registry);
        let platform = Arc::clone(&self.platform);
        let ui = Arc::clone(&self.ui);
        let config = self.config.clone();

        tokio::spawn(async move {
            drive(session, registry, platform, ui, config).await;
        });

        Ok(id)
    }
}

impl std::fmt::Debug for PermissionFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermissionFlow")
            .field("pending_sessions", &self.registry.len())
            .field("config", &self.config)
            .finish()
    }
}

/// One in-flight request; lives inside the detached task
struct Session {
    id: Uuid,
    permissions: Vec<Permission>,
    rationale: String,
    mode: RequestMode,
}

async fn drive(
    session: Session,
    registry: Arc<CallbackRegistry>,
    platform: Arc<dyn PlatformState>,
    ui: Arc<dyn PermissionUi>,
    config: FlowConfig,
) {
    match session.mode.settings_screen() {
        None => drive_runtime(session, registry, platform, ui, config).await,
        Some(screen) => drive_settings(session, screen, registry, platform, ui, config).await,
    }
}

/// Standard runtime-permission path: optional rationale, then the prompt
async fn drive_runtime(
    session: Session,
    registry: Arc<CallbackRegistry>,
    platform: Arc<dyn PlatformState>,
    ui: Arc<dyn PermissionUi>,
    config: FlowConfig,
) {
    // Covers both "already granted" and platforms with no runtime model.
    if matches!(
        query::all_granted(platform.as_ref(), &session.permissions),
        Ok(true)
    ) {
        registry.deliver(session.id, Outcome::AllGranted);
        return;
    }

    let show = rationale::should_show_rationale(&session.permissions, &session.rationale, |p| {
        platform.can_show_rationale(p)
    });
    if show {
        match ui.show_rationale(&session.rationale, &config.allow_label).await {
            RationaleChoice::Accepted => {}
            RationaleChoice::Declined => {
                // Declining the explanation counts as denying the whole set.
                tracing::info!("[PermissionFlow] Session {} rationale declined", session.id);
                registry.deliver(session.id, Outcome::SomeDenied(session.permissions));
                return;
            }
        }
    }

    let results = ui.request_permissions(&session.permissions).await;

    // The collaborator makes no ordering promise for the grant vector;
    // reduce over the request order so denial reporting is deterministic.
    // Anything the vector omits counts as denied.
    let grants: HashMap<&str, bool> = results
        .iter()
        .map(|(permission, granted)| (permission.as_str(), *granted))
        .collect();
    let ordered: Vec<(Permission, bool)> = session
        .permissions
        .iter()
        .map(|p| (p.clone(), *grants.get(p.as_str()).unwrap_or(&false)))
        .collect();

    // Permanence is only knowable after the denial: a denied permission
    // with no system rationale left is permanent.
    let outcome = reducer::reduce(&ordered, |p| !platform.can_show_rationale(p));
    registry.deliver(session.id, outcome);
}

/// Settings-redirect path: optional rationale, Settings hop, then re-query
async fn drive_settings(
    session: Session,
    screen: SettingsScreen,
    registry: Arc<CallbackRegistry>,
    platform: Arc<dyn PlatformState>,
    ui: Arc<dyn PermissionUi>,
    config: FlowConfig,
) {
    // Already-held special grants skip the Settings hop entirely. The app
    // details page is exempt: its whole point is showing the screen.
    let already_held = match screen {
        SettingsScreen::ManageUnknownAppSources => {
            query::has_install_unknown_apps(platform.as_ref())
        }
        SettingsScreen::ManageOverlay => query::has_draw_overlays(platform.as_ref()),
        SettingsScreen::AppDetails => false,
    };
    if already_held {
        registry.deliver(session.id, Outcome::AllGranted);
        return;
    }

    if !session.rationale.is_empty() {
        match ui
            .show_rationale(&session.rationale, &config.settings_label)
            .await
        {
            RationaleChoice::Accepted => {}
            RationaleChoice::Declined => {
                // The user can simply do nothing with a Settings redirect;
                // the session stays registered and the caller retries by
                // issuing a new request.
                tracing::info!(
                    "[PermissionFlow] Session {} settings rationale declined, nothing delivered",
                    session.id
                );
                return;
            }
        }
    }

    ui.open_settings(screen).await;

    // No completion signal exists for the Settings hop; re-query state.
    let outcome = match screen {
        SettingsScreen::ManageUnknownAppSources => grant_outcome(
            query::has_install_unknown_apps(platform.as_ref()),
            session.permissions,
        ),
        SettingsScreen::ManageOverlay => grant_outcome(
            query::has_draw_overlays(platform.as_ref()),
            session.permissions,
        ),
        SettingsScreen::AppDetails => {
            let results: Vec<(Permission, bool)> = session
                .permissions
                .iter()
                .map(|p| (p.clone(), platform.is_granted(p)))
                .collect();
            reducer::reduce(&results, |p| !platform.can_show_rationale(p))
        }
    };
    registry.deliver(session.id, outcome);
}

/// Outcome for the single-grant Settings flows (install / overlay)
///
/// These never classify as permanently denied: the Settings toggle is
/// always available again.
fn grant_outcome(held: bool, permissions: Vec<Permission>) -> Outcome {
    if held {
        Outcome::AllGranted
    } else {
        Outcome::SomeDenied(permissions)
    }
}
