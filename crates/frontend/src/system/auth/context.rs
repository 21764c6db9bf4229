use contracts::system::auth::AuthUser;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

/// Ambient session state, provided once at the app root. `restoring` is
/// true until the stored-session check has finished, so guards can show a
/// placeholder instead of bouncing to the login page on a hard refresh.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub restoring: bool,
    pub access_token: Option<String>,
    pub user: Option<AuthUser>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            restoring: true,
            access_token: None,
            user: None,
        }
    }
}

impl AuthState {
    pub fn signed_in(access_token: String, user: AuthUser) -> Self {
        Self {
            restoring: false,
            access_token: Some(access_token),
            user: Some(user),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            restoring: false,
            access_token: None,
            user: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());

    // Try to restore session from localStorage on mount
    create_effect(move |_| {
        spawn_local(async move {
            let Some(access_token) = storage::get_access_token() else {
                set_auth_state.set(AuthState::signed_out());
                return;
            };

            // Validate token by fetching the identity behind it
            match api::get_user(&access_token).await {
                Ok(user) => {
                    set_auth_state.set(AuthState::signed_in(access_token, user));
                }
                Err(_) => {
                    // Token invalid or expired, try the refresh token
                    if let Some(refresh_token) = storage::get_refresh_token() {
                        match api::refresh_session(refresh_token).await {
                            Ok(session) => {
                                storage::save_access_token(&session.access_token);
                                storage::save_refresh_token(&session.refresh_token);
                                set_auth_state.set(AuthState::signed_in(
                                    session.access_token,
                                    session.user,
                                ));
                            }
                            Err(_) => {
                                storage::clear_tokens();
                                set_auth_state.set(AuthState::signed_out());
                            }
                        }
                    } else {
                        storage::clear_tokens();
                        set_auth_state.set(AuthState::signed_out());
                    }
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: sign out, revoke the session and clear local state
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(access_token) = storage::get_access_token() {
        // Revocation failure is not actionable client-side
        let _ = api::sign_out(&access_token).await;
    }

    storage::clear_tokens();
    set_auth_state.set(AuthState::signed_out());
}
