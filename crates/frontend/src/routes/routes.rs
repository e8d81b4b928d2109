use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::d100_daily_summary::ui::DailySummaryDashboard;
use crate::domain::a001_order::ui::cashier::CashierPage;
use crate::domain::a001_order::ui::tracker::TrackerPage;
use crate::domain::a002_customer::ui::list::CustomerListPage;
use crate::layout::header::Header;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Router>
            <Header />
            <main class="page-content">
                <Routes fallback=|| view! { <div class="not-found">"Страница не найдена"</div> }>
                    <Route path=path!("/") view=CashierPage />
                    <Route path=path!("/tracker") view=TrackerPage />
                    <Route path=path!("/customers") view=CustomerListPage />
                    <Route path=path!("/dashboard") view=DailySummaryDashboard />

                    // Paths kept alive from the previous generation of the app
                    <Route path=path!("/add-order") view=|| view! { <Redirect path="/" /> } />
                    <Route path=path!("/su/app/tracker") view=|| view! { <Redirect path="/tracker" /> } />
                    <Route path=path!("/su/app/customers") view=|| view! { <Redirect path="/customers" /> } />
                    <Route path=path!("/completed") view=|| view! { <Redirect path="/dashboard" /> } />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
