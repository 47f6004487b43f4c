use chrono::Datelike;
use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::domain::author::ui::details::AuthorDetails;
use crate::domain::book::ui::details::BookDetails;
use crate::shared::dropdown::DropdownService;

/// The two entry forms reachable from the tab switcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormTab {
    Book,
    Author,
}

#[component]
pub fn LibraryPage() -> impl IntoView {
    let dropdowns = use_context::<DropdownService>()
        .expect("DropdownService not provided in context (provide it in app root)");

    // The clock is read once here and injected downward; validators and the
    // year lists never touch it themselves.
    let current_year = chrono::Utc::now().year();

    let (active_tab, set_active_tab) = signal(FormTab::Book);

    // Presses anywhere outside a dropdown close whichever one is open.
    // The watch deregisters its document listener when the page unmounts.
    if let Some(watch) = dropdowns.watch_outside_clicks() {
        let watch = SendWrapper::new(watch);
        on_cleanup(move || drop(watch.take()));
    }

    let select_tab = move |tab: FormTab| {
        set_active_tab.set(tab);
        dropdowns.close_all();
    };

    view! {
        <div class="page">
            <aside class="page__hero">
                <h2 class="hero__title">"Organise Your " <em>"Library"</em></h2>
                <p class="hero__subtitle">
                    "Keep track of your favourite books and authors. Build your personal collection, one entry at a time."
                </p>
            </aside>

            <main class="page__content">
                <p class="page__kicker">"LIBRARY COLLECTION"</p>
                <h1 class="page__title">
                    "Add Your "
                    <em>
                        {move || {
                            if active_tab.get() == FormTab::Book { "Books" } else { "Authors" }
                        }}
                    </em>
                </h1>

                <div class="tabs">
                    <button
                        class=move || {
                            if active_tab.get() == FormTab::Book {
                                "tabs__button tabs__button--active"
                            } else {
                                "tabs__button"
                            }
                        }
                        on:click=move |_| select_tab(FormTab::Book)
                    >
                        "Books"
                    </button>
                    <button
                        class=move || {
                            if active_tab.get() == FormTab::Author {
                                "tabs__button tabs__button--active"
                            } else {
                                "tabs__button"
                            }
                        }
                        on:click=move |_| select_tab(FormTab::Author)
                    >
                        "Authors"
                    </button>
                </div>

                // Both panes stay mounted so entered values survive tab switches.
                <div
                    class="tabs__item"
                    class:tabs__item--hidden=move || active_tab.get() != FormTab::Book
                >
                    <BookDetails current_year=current_year />
                </div>
                <div
                    class="tabs__item"
                    class:tabs__item--hidden=move || active_tab.get() != FormTab::Author
                >
                    <AuthorDetails current_year=current_year />
                </div>
            </main>
        </div>
    }
}
