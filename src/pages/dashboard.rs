//! Dashboard page shown after signup or signin.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session record once on mount and shows the user's email. A
//! missing or malformed record renders blank fields. Logout is local only:
//! it clears storage and returns to the entry screen.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::LOGIN_ROUTE;
use crate::state::auth::{AuthState, logout};
use crate::state::session::Session;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let mount_session = session.clone();
    let auth = LocalResource::new(move || {
        let session = mount_session.clone();
        async move { AuthState::load(&session) }
    });

    let on_logout = move |_| {
        logout(&session);
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <div class="dashboard-card">
                <h1 class="dashboard-card__title">"Welcome to the Application"</h1>
                <Suspense fallback=|| view! { <p class="dashboard-card__loading">"Loading..."</p> }>
                    <h6 class="dashboard-card__email">
                        {move || auth.get().map(|state| state.email()).unwrap_or_default()}
                    </h6>
                </Suspense>
                <button class="logout-button" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </div>
    }
}
