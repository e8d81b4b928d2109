use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// Restore the session from localStorage. A token that no longer passes
/// `/me` is dropped so the login screen shows instead of a broken shell.
async fn restore_session(set_auth_state: WriteSignal<AuthState>) {
    let Some(token) = storage::get_access_token() else {
        return;
    };
    match api::get_current_user(&token).await {
        Ok(user_info) => set_auth_state.set(AuthState {
            access_token: Some(token),
            user_info: Some(user_info),
        }),
        Err(_) => storage::clear_tokens(),
    }
}

#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    Effect::new(move |_| {
        spawn_local(restore_session(set_auth_state));
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");
    (auth_state, set_auth_state)
}

pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}
