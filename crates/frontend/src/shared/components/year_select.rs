use leptos::prelude::*;

use crate::shared::dropdown::{DropdownId, DropdownService};

/// Single-value year dropdown.
///
/// Unlike the multi-select, the menu closes as soon as a year is picked.
#[component]
pub fn YearDropdown(
    /// Label text
    #[prop(into)]
    label: String,
    /// Which dropdown this widget is, for the coordinator
    id: DropdownId,
    /// Current value as entered ("" while unset)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the picked year, already rendered as a string
    on_change: Callback<String>,
    /// Years offered, in display order (newest first)
    options: Vec<i32>,
    /// Placeholder shown while no year is picked
    #[prop(into)]
    placeholder: String,
    /// Validation error for this field, if any
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    let dropdowns = use_context::<DropdownService>()
        .expect("DropdownService not provided in context (provide it in app root)");

    let is_open = move || dropdowns.is_open(id);
    // Stored so the menu's render closure stays `Fn` (it runs on every open).
    let options = StoredValue::new(options);

    view! {
        <div class="form__group form__group--dropdown">
            <label class="form__label">{label}</label>
            <div
                data-dropdown=""
                class=move || {
                    if error.get().is_some() {
                        "dropdown__trigger dropdown__trigger--error"
                    } else {
                        "dropdown__trigger"
                    }
                }
                on:click=move |_| dropdowns.toggle(id)
            >
                <span class=move || {
                    if value.get().is_empty() { "dropdown__placeholder" } else { "dropdown__value" }
                }>
                    {
                        let placeholder = placeholder.clone();
                        move || {
                            let current = value.get();
                            if current.is_empty() { placeholder.clone() } else { current }
                        }
                    }
                </span>
                <span class=move || {
                    if is_open() { "dropdown__arrow dropdown__arrow--open" } else { "dropdown__arrow" }
                }>"▾"</span>
            </div>

            <Show when=is_open>
                <div data-dropdown="" class="dropdown__menu">
                    <For
                        each=move || options.get_value()
                        key=|year| *year
                        children=move |year| {
                            let item_class = move || {
                                if value.get() == year.to_string() {
                                    "dropdown__item dropdown__item--selected"
                                } else {
                                    "dropdown__item"
                                }
                            };
                            view! {
                                <div
                                    class=item_class
                                    on:click=move |_| {
                                        on_change.run(year.to_string());
                                        dropdowns.close_all();
                                    }
                                >
                                    {year}
                                </div>
                            }
                        }
                    />
                </div>
            </Show>

            {move || error.get().map(|e| view! { <p class="form__error">{e}</p> })}
        </div>
    }
}
