//! API error and success messages shown above a form.

use leptos::prelude::*;

use crate::state::form::FormState;

#[component]
pub fn FormBanner(form: RwSignal<FormState>) -> impl IntoView {
    let api_error = move || form.with(|f| f.errors.api.clone());
    let success = move || form.with(|f| f.success_message.clone());

    view! {
        <Show when=move || api_error().is_some()>
            <p class="form-banner form-banner--error">{move || api_error().unwrap_or_default()}</p>
        </Show>
        <Show when=move || success().is_some()>
            <p class="form-banner form-banner--success">{move || success().unwrap_or_default()}</p>
        </Show>
    }
}
