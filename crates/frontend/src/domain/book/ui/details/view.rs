use super::view_model::BookDetailsViewModel;
use contracts::domain::book::fields;
use leptos::prelude::*;

use crate::shared::components::{MultiSelectDropdown, TextInput, YearDropdown};
use crate::shared::dropdown::DropdownId;
use crate::shared::toast::ToastService;

#[component]
pub fn BookDetails(current_year: i32) -> impl IntoView {
    let toasts = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");
    let vm = BookDetailsViewModel::new(current_year, toasts);

    let form = vm.form.clone();

    let title_value = Signal::derive({
        let form = form.clone();
        move || form.with_values(|draft| draft.title.clone())
    });
    let title_error = Signal::derive({
        let form = form.clone();
        move || form.field_error(fields::TITLE)
    });
    let on_title = Callback::new({
        let form = form.clone();
        move |value: String| form.update_field(fields::TITLE, move |draft| draft.title = value)
    });

    let genre_selected = Signal::derive({
        let form = form.clone();
        move || form.with_values(|draft| draft.genre.clone())
    });
    let genre_error = Signal::derive({
        let form = form.clone();
        move || form.field_error(fields::GENRE)
    });
    let on_genre_select = Callback::new({
        let vm = vm.clone();
        move |genre: String| vm.toggle_genre(genre)
    });
    let on_genre_remove = Callback::new({
        let vm = vm.clone();
        move |genre: String| vm.remove_genre(genre)
    });

    let year_value = Signal::derive({
        let form = form.clone();
        move || form.with_values(|draft| draft.published_year.clone())
    });
    let year_error = Signal::derive({
        let form = form.clone();
        move || form.field_error(fields::PUBLISHED_YEAR)
    });
    let on_year = Callback::new({
        let form = form.clone();
        move |year: String| {
            form.update_field(fields::PUBLISHED_YEAR, move |draft| {
                draft.published_year = year
            })
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
                label="Book Title*"
                id="title"
                value=title_value
                on_input=on_title
                placeholder="Enter book title"
                error=title_error
            />

            <MultiSelectDropdown
                label="Genre*"
                id=DropdownId::Genre
                options=vm.genre_options()
                selected=genre_selected
                on_select=on_genre_select
                on_remove=on_genre_remove
                placeholder="Select genres"
                error=genre_error
            />

            <YearDropdown
                label="Published Year*"
                id=DropdownId::PublishedYear
                value=year_value
                on_change=on_year
                options=vm.year_options()
                placeholder="Select published year"
                error=year_error
            />

            {move || submit_error.get().map(|e| view! { <p class="form__error">{e}</p> })}

            <button type="submit" class="btn btn--primary" disabled=is_submitting>
                {button_label}
            </button>
        </form>
    }
}
