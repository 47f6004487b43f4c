use super::view_model::AuthorDetailsViewModel;
use contracts::domain::author::fields;
use leptos::prelude::*;

use crate::shared::components::{TextInput, YearDropdown};
use crate::shared::dropdown::DropdownId;
use crate::shared::toast::ToastService;

#[component]
pub fn AuthorDetails(current_year: i32) -> impl IntoView {
    let toasts = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");
    let vm = AuthorDetailsViewModel::new(current_year, toasts);

    let form = vm.form.clone();

    let first_name_value = Signal::derive({
        let form = form.clone();
        move || form.with_values(|draft| draft.first_name.clone())
    });
    let first_name_error = Signal::derive({
        let form = form.clone();
        move || form.field_error(fields::FIRST_NAME)
    });
    let on_first_name = Callback::new({
        let form = form.clone();
        move |value: String| {
            form.update_field(fields::FIRST_NAME, move |draft| draft.first_name = value)
        }
    });

    let last_name_value = Signal::derive({
        let form = form.clone();
        move || form.with_values(|draft| draft.last_name.clone())
    });
    let last_name_error = Signal::derive({
        let form = form.clone();
        move || form.field_error(fields::LAST_NAME)
    });
    let on_last_name = Callback::new({
        let form = form.clone();
        move |value: String| {
            form.update_field(fields::LAST_NAME, move |draft| draft.last_name = value)
        }
    });

    let birth_year_value = Signal::derive({
        let form = form.clone();
        move || form.with_values(|draft| draft.birth_year.clone())
    });
    let birth_year_error = Signal::derive({
        let form = form.clone();
        move || form.field_error(fields::BIRTH_YEAR)
    });
    let on_birth_year = Callback::new({
        let form = form.clone();
        move |year: String| {
            form.update_field(fields::BIRTH_YEAR, move |draft| draft.birth_year = year)
        }
    });

    let submit_error = Signal::derive({
        let form = form.clone();
        move || form.submit_error()
    });
    let is_submitting = {
        let form = form.clone();
        move || form.submitting()
    };
    let button_label = {
        let form = form.clone();
        move || if form.submitting() { "Submitting..." } else { "Submit" }
    };

    view! {
        <form
            class="form"
            on:submit={
                let form = form.clone();
                move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    form.handle_submit();
                }
            }
        >
            <TextInput
                label="First Name*"
                id="first_name"
                value=first_name_value
                on_input=on_first_name
                placeholder="Enter first name"
                error=first_name_error
            />

            <TextInput
                label="Last Name*"
                id="last_name"
                value=last_name_value
                on_input=on_last_name
                placeholder="Enter last name"
                error=last_name_error
            />

            <YearDropdown
                label="Birth Year*"
                id=DropdownId::BirthYear
                value=birth_year_value
                on_change=on_birth_year
                options=vm.year_options()
                placeholder="Select birth year"
                error=birth_year_error
            />

            {move || submit_error.get().map(|e| view! { <p class="form__error">{e}</p> })}

            <button type="submit" class="btn btn--primary" disabled=is_submitting>
                {button_label}
            </button>
        </form>
    }
}
