//! Password input with a show/hide toggle.
//!
//! Visibility is local to each field instance and never persisted.

#[cfg(test)]
#[path = "password_field_test.rs"]
mod password_field_test;

use leptos::prelude::*;

use super::text_field::input_class;

pub(crate) fn input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

pub(crate) fn toggle_label(visible: bool) -> &'static str {
    if visible { "Hide" } else { "Show" }
}

#[component]
pub fn PasswordField(
    #[prop(into)] id: String,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div class="form-field form-field--password">
            <label for=id.clone() class="form-label">"Password"</label>
            <input
                id=id
                type=move || input_type(visible.get())
                placeholder="Enter your password"
                class=move || input_class(error.get().is_some())
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button
                type="button"
                class="password-toggle"
                aria-label=move || format!("{} password", toggle_label(visible.get()))
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                {move || toggle_label(visible.get())}
            </button>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
