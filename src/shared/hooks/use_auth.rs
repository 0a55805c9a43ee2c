use dioxus::prelude::*;

use crate::domain::models::User;
use crate::shared::errors::ClientError;
use crate::shared::services::ApiService;
use crate::shared::storage;

/// Logged-in user shared through context
#[derive(Clone, Copy, PartialEq)]
pub struct AuthState {
    pub user: Signal<Option<User>>,
    /// False until the stored mirror or `/api/auth/me` has been consulted
    pub ready: Signal<bool>,
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.user.read().is_some()
    }

    /// Record a fresh session (after login, register or `/me`)
    pub fn sign_in(&mut self, user: User) {
        storage::save_session_user(&user);
        self.user.set(Some(user));
        self.ready.set(true);
    }

    pub fn sign_out(&mut self) {
        storage::clear_session();
        self.user.set(None);
        self.ready.set(true);
    }

    /// Drop the server cookie, then the local state; the latter happens even if the call fails
    pub async fn logout(mut self) {
        if let Err(e) = ApiService::new().logout().await {
            tracing::warn!("Logout request failed: {}", e);
        }
        self.sign_out();
    }
}

/// Install the auth context at the app root and hydrate it on the client
pub fn use_auth_provider() -> AuthState {
    let auth = use_context_provider(|| AuthState {
        user: Signal::new(None),
        ready: Signal::new(false),
    });

    // Effects only run in the browser, so SSR output stays logged-out
    use_effect(move || {
        let mut auth = auth;
        spawn(async move {
            if let Some(user) = storage::load_session_user() {
                auth.user.set(Some(user));
                auth.ready.set(true);
            }

            match ApiService::new().me().await {
                Ok(user) => auth.sign_in(user),
                Err(ClientError::Unauthorized) => auth.sign_out(),
                Err(e) => {
                    // Keep whatever the mirror said; the next API call settles it
                    tracing::warn!("Session check failed: {}", e);
                    auth.ready.set(true);
                }
            }
        });
    });

    auth
}

pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
