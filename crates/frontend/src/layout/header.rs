use leptos::prelude::*;
use leptos_router::components::A;

use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let user_label = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.full_name.unwrap_or(u.username))
            .unwrap_or_default()
    };

    view! {
        <header class="app-header">
            <div class="app-header__brand">"Кофейня"</div>
            <nav class="app-header__nav">
                <A href="/">"Касса"</A>
                <A href="/tracker">"Заказы"</A>
                <A href="/customers">"Клиенты"</A>
                <A href="/dashboard">"Выручка"</A>
            </nav>
            <div class="app-header__user">
                <span>{user_label}</span>
                <button class="btn-link" on:click=move |_| do_logout(set_auth_state)>
                    "Выйти"
                </button>
            </div>
        </header>
    }
}
