use contracts::system::auth::UserProfile;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::session::SessionStatus;

/// Session of the current visitor. Created once by the app and handed to
/// the components that need it.
#[derive(Clone, Copy)]
pub struct SessionContext {
    status: RwSignal<SessionStatus>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(SessionStatus::Loading),
        }
    }

    /// Tracked read of the current status
    pub fn status(&self) -> SessionStatus {
        self.status.get()
    }

    pub fn is_loading(&self) -> bool {
        self.status.with(SessionStatus::is_loading)
    }

    pub fn is_admin(&self) -> bool {
        self.status.with(SessionStatus::is_admin)
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.status.with(|s| s.profile().cloned())
    }

    /// Re-fetch the profile; any failure leaves the session anonymous
    pub fn refresh(&self) {
        let status = self.status;
        status.set(SessionStatus::Loading);
        spawn_local(async move {
            match api::fetch_profile().await {
                Ok(profile) => {
                    log::info!("Session loaded for {}", profile.email);
                    status.set(SessionStatus::Authenticated(profile));
                }
                Err(e) => {
                    log::warn!("No active session: {}", e);
                    status.set(SessionStatus::Anonymous);
                }
            }
        });
    }

    pub fn teardown(&self) {
        self.status.set(SessionStatus::Anonymous);
    }

    /// Logout on the server, then drop the local session regardless of the result
    pub async fn logout(&self) {
        if let Err(e) = api::logout().await {
            log::error!("Logout request failed: {}", e);
        } else {
            log::info!("Logged out");
        }
        self.teardown();
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
