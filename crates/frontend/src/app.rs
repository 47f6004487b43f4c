use crate::layout::LibraryPage;
use crate::shared::dropdown::DropdownService;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Services shared by both forms, provided once for the whole app.
    provide_context(ToastService::new());
    provide_context(DropdownService::new());

    view! {
        <ToastHost />
        <LibraryPage />
    }
}
