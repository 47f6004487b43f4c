use leptos::prelude::*;

use crate::shared::dropdown::{DropdownId, DropdownService};

/// Multi-select dropdown with chip display.
///
/// Picking an option toggles its membership and keeps the menu open for
/// further picks; only an outside click or the trigger dismisses it. The
/// chip remove button works without touching the menu.
#[component]
pub fn MultiSelectDropdown(
    /// Label text
    #[prop(into)]
    label: String,
    /// Which dropdown this widget is, for the coordinator
    id: DropdownId,
    /// All options, in display order
    options: Vec<String>,
    /// Currently selected values, in selection order
    #[prop(into)]
    selected: Signal<Vec<String>>,
    /// Called with the clicked option (caller toggles membership)
    on_select: Callback<String>,
    /// Called with the value whose chip remove button was clicked
    on_remove: Callback<String>,
    /// Placeholder shown while nothing is selected
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
                <div class="multi-select__content">
                    <Show
                        when=move || !selected.get().is_empty()
                        fallback={
                            let placeholder = placeholder.clone();
                            move || {
                                view! {
                                    <span class="dropdown__placeholder">{placeholder.clone()}</span>
                                }
                            }
                        }
                    >
                        <For
                            each=move || selected.get()
                            key=|value| value.clone()
                            children=move |value| {
                                let remove_value = value.clone();
                                view! {
                                    <span class="chip">
                                        {value}
                                        <button
                                            type="button"
                                            class="chip__remove"
                                            on:click=move |ev| {
                                                // Removing a chip must not toggle the menu.
                                                ev.stop_propagation();
                                                on_remove.run(remove_value.clone());
                                            }
                                        >
                                            "×"
                                        </button>
                                    </span>
                                }
                            }
                        />
                    </Show>
                    <span class=move || {
                        if is_open() { "dropdown__arrow dropdown__arrow--open" } else { "dropdown__arrow" }
                    }>"▾"</span>
                </div>
            </div>

            <Show when=is_open>
                <div data-dropdown="" class="dropdown__menu">
                    <For
                        each=move || options.get_value()
                        key=|option| option.clone()
                        children=move |option| {
                            let select_value = option.clone();
                            let check_value = option.clone();
                            let is_selected =
                                move || selected.get().iter().any(|v| v == &check_value);
                            let item_class = {
                                let is_selected = is_selected.clone();
                                move || {
                                    if is_selected() {
                                        "dropdown__item dropdown__item--selected"
                                    } else {
                                        "dropdown__item"
                                    }
                                }
                            };
                            view! {
                                <div
                                    class=item_class
                                    on:click=move |_| on_select.run(select_value.clone())
                                >
                                    <span>{option}</span>
                                    <Show when=is_selected>
                                        <span class="dropdown__check">"✓"</span>
                                    </Show>
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
