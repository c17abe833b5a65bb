use client::credential::landing_route_for;
use client::{ApiClient, ResourceCache, Session, SessionState};
use dioxus::prelude::*;
use shared_types::AppError;

/// Global authentication state.
///
/// `session` is the source of truth; `state` mirrors it so the navbar and the
/// guard re-render when the credential changes.
#[derive(Clone, PartialEq)]
pub struct AuthState {
    session: Session,
    api: ApiClient,
    pub state: Signal<SessionState>,
}

impl AuthState {
    pub fn new(session: Session, api: ApiClient) -> Self {
        let initial = session.state();
        Self {
            session,
            api,
            state: Signal::new(initial),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        *self.state.read() == SessionState::LoggedIn
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Store a freshly issued credential and return the dashboard path its
    /// role claim points at.
    pub fn sign_in(&mut self, token: &str) -> Result<&'static str, AppError> {
        self.session.set_credential(token)?;
        self.state.set(SessionState::LoggedIn);
        Ok(landing_route_for(token))
    }

    /// Drop the credential and every cached snapshot.
    pub fn sign_out(&mut self, mut cache: Signal<ResourceCache>) {
        if let Err(e) = self.session.clear_credential() {
            tracing::warn!(error = %e, "Failed to clear stored credential");
        }
        cache.write().clear();
        self.state.set(SessionState::LoggedOut);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// The shared REST client.
pub fn use_api() -> ApiClient {
    use_auth().api().clone()
}
