//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::AppConfig;
use crate::net::api::ApiClients;
use crate::net::transport::default_transport;
use crate::pages::{dashboard::DashboardPage, signin::SigninPage, signup::SignupPage};
use crate::state::session::Session;

pub const LOGIN_ROUTE: &str = "/";
pub const SIGNUP_ROUTE: &str = "/signup";
pub const APPLICATION_ROUTE: &str = "/application";

/// Session storage for the current build target.
fn target_session() -> Session {
    #[cfg(feature = "csr")]
    {
        Session::browser()
    }
    #[cfg(not(feature = "csr"))]
    {
        Session::in_memory()
    }
}

/// Root application component.
///
/// Provides config, the session handle and both API clients as context and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let session = target_session();
    let clients = ApiClients::new(&config, default_transport(), &session);

    provide_context(config);
    provide_context(session);
    provide_context(clients);

    view! {
        <Stylesheet id="leptos" href="/pkg/accounts-web.css"/>
        <Title text="Accounts"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SigninPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("application") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
