use contracts::system::auth::AdminSession;
use leptos::prelude::*;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub admin_name: String,
}

impl AuthState {
    fn from_storage() -> Self {
        Self {
            token: storage::get_token(),
            admin_name: storage::get_admin_fullname(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Auth context provider component.
///
/// The session is restored synchronously from localStorage so guarded pages
/// never flash the login screen on reload.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::from_storage());

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

fn apply_session(set_auth_state: WriteSignal<AuthState>, session: &AdminSession) {
    storage::save_session(&session.token, &session.username, &session.full_name);
    set_auth_state.set(AuthState {
        token: Some(session.token.clone()),
        admin_name: session.full_name.clone(),
    });
}

/// Perform login and publish the new session
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), String> {
    let session = api::login(username, password).await?;
    log::info!("admin {} logged in", session.username);
    apply_session(set_auth_state, &session);
    Ok(())
}

/// Drop the session locally; the backend token is stateless
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
