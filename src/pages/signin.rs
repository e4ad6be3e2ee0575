//! Signin page: the entry screen at `/`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::{APPLICATION_ROUTE, SIGNUP_ROUTE};
use crate::components::form_banner::FormBanner;
use crate::components::password_field::PasswordField;
use crate::components::text_field::TextField;
use crate::config::AppConfig;
use crate::net::api::ApiClients;
use crate::state::auth::{SigninInput, submit_signin};
use crate::state::form::{FormState, SIGNIN_SUCCESS};
use crate::state::session::Session;
use crate::util::delay::sleep;

/// Login form. A successful login stores the session record and access
/// token, then redirects to the dashboard.
#[component]
pub fn SigninPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let clients = expect_context::<ApiClients>();
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(FormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = SigninInput {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let errors = input.validate();
        if !form.try_update(|f| f.begin_submit(errors)).unwrap_or(false) {
            return;
        }

        let request = input.to_request();
        let client = clients.auth.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        let delay = config.redirect_delay;
        leptos::task::spawn_local(async move {
            match submit_signin(&client, &session, &request).await {
                Ok(_) => {
                    form.update(|f| f.succeed(SIGNIN_SUCCESS));
                    sleep(delay).await;
                    navigate(APPLICATION_ROUTE, NavigateOptions::default());
                }
                Err(e) => form.update(|f| f.fail(&e)),
            }
        });
    };

    let busy = move || form.with(FormState::is_busy);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Sign In"</h2>
                <FormBanner form=form/>
                <form on:submit=on_submit>
                    <TextField
                        id="email"
                        label="Email"
                        input_type="email"
                        placeholder="Enter your email"
                        value=email
                        error=Signal::derive(move || form.with(|f| f.errors.email.clone()))
                    />
                    <PasswordField
                        id="password"
                        value=password
                        error=Signal::derive(move || form.with(|f| f.errors.password.clone()))
                    />
                    <button class="auth-button" type="submit" disabled=busy>
                        {move || if busy() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href=SIGNUP_ROUTE class="auth-link" title="Go to signup">"Sign up here"</a>
                </p>
            </div>
        </div>
    }
}
