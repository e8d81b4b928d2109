use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::AuthState;
use crate::system::auth::{api, context::use_auth, storage};

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let (_, set_auth_state) = use_auth();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        busy.set(true);
        error.set(None);
        let login = username.get();
        let pass = password.get();
        spawn_local(async move {
            match api::login(login, pass).await {
                Ok(response) => {
                    storage::save_access_token(&response.access_token);
                    set_auth_state.set(AuthState {
                        access_token: Some(response.access_token),
                        user_info: Some(response.user),
                    });
                }
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-container">
            <form class="login-box" on:submit=submit>
                <h1>"Кофейня"</h1>
                <h2>"Вход в систему"</h2>

                {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

                <div class="form-group">
                    <label for="username">"Логин"</label>
                    <input
                        type="text"
                        id="username"
                        placeholder="admin"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                        required
                        disabled=move || busy.get()
                    />
                </div>

                <div class="form-group">
                    <label for="password">"Пароль"</label>
                    <input
                        type="password"
                        id="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        required
                        disabled=move || busy.get()
                    />
                </div>

                <button type="submit" class="btn-primary" disabled=move || busy.get()>
                    {move || if busy.get() { "Вход..." } else { "Войти" }}
                </button>
            </form>
        </div>
    }
}
