//! Signup page: collects username, email and password and registers the
//! account.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the registration response becomes the session record and the
//! user is sent to the dashboard after a short pause.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::{APPLICATION_ROUTE, LOGIN_ROUTE};
use crate::components::form_banner::FormBanner;
use crate::components::password_field::PasswordField;
use crate::components::text_field::TextField;
use crate::config::AppConfig;
use crate::net::api::ApiClients;
use crate::state::auth::{SignupInput, submit_signup};
use crate::state::form::{FormState, SIGNUP_SUCCESS};
use crate::state::session::Session;
use crate::util::delay::sleep;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let clients = expect_context::<ApiClients>();
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(FormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = SignupInput {
            email: email.get_untracked(),
            name: name.get_untracked(),
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
            match submit_signup(&client, &session, &request).await {
                Ok(_) => {
                    form.update(|f| f.succeed(SIGNUP_SUCCESS));
                    sleep(delay).await;
                    navigate(APPLICATION_ROUTE, NavigateOptions::default());
                }
                Err(e) => form.update(|f| f.fail(&e)),
            }
        });
    };

    let busy = move || form.with(FormState::is_busy);
    let field_error = move |pick: fn(&FormState) -> Option<String>| Signal::derive(move || form.with(pick));

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Sign Up"</h2>
                <FormBanner form=form/>
                <form on:submit=on_submit>
                    <TextField
                        id="email"
                        label="Email"
                        input_type="email"
                        placeholder="Enter your email"
                        value=email
                        error=field_error(|f| f.errors.email.clone())
                    />
                    <TextField
                        id="name"
                        label="Name"
                        input_type="text"
                        placeholder="Enter your name"
                        value=name
                        error=field_error(|f| f.errors.name.clone())
                    />
                    <PasswordField
                        id="password"
                        value=password
                        error=field_error(|f| f.errors.password.clone())
                    />
                    <button class="auth-button" type="submit" disabled=busy>
                        {move || if busy() { "Signing Up..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href=LOGIN_ROUTE class="auth-link" title="Go to login">"Login here"</a>
                </p>
            </div>
        </div>
    }
}
