//! Labelled text input with an inline validation message.

use leptos::prelude::*;

pub(crate) fn input_class(has_error: bool) -> &'static str {
    if has_error { "form-input form-input--error" } else { "form-input" }
}

#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] input_type: String,
    #[prop(into)] placeholder: String,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=id.clone() class="form-label">{label}</label>
            <input
                id=id
                type=input_type
                placeholder=placeholder
                class=move || input_class(error.get().is_some())
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
