use leptos::prelude::*;

/// Text input with label and inline validation error
#[component]
pub fn TextInput(
    /// Label text
    #[prop(into)]
    label: String,
    /// ID for the input element
    #[prop(into)]
    id: String,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler, receives the new value
    on_input: Callback<String>,
    /// Placeholder text
    #[prop(into)]
    placeholder: String,
    /// Validation error for this field, if any
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>
                {label}
            </label>
            <input
                type="text"
                id=id
                class=move || {
                    if error.get().is_some() {
                        "form__input form__input--error"
                    } else {
                        "form__input"
                    }
                }
                prop:value=move || value.get()
                placeholder=placeholder
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|e| view! { <p class="form__error">{e}</p> })}
        </div>
    }
}
