use contracts::domain::book::{
    fields, validate_book, BookDraft, BookRules, GENRE_OPTIONS,
};

use crate::shared::form::FormController;
use crate::shared::toast::ToastService;

/// ViewModel for the book entry form.
#[derive(Clone)]
pub struct BookDetailsViewModel {
    pub form: FormController<BookDraft>,
    rules: BookRules,
}

impl BookDetailsViewModel {
    pub fn new(current_year: i32, toasts: ToastService) -> Self {
        let rules = BookRules::for_year(current_year);
        let form = FormController::new(
            BookDraft::default(),
            move |draft: &BookDraft| validate_book(draft, &rules),
            move |draft: BookDraft| async move { submit_book(&draft, toasts) },
        );
        Self { form, rules }
    }

    /// Years offered by the published-year dropdown, newest first.
    pub fn year_options(&self) -> Vec<i32> {
        (self.rules.min_published_year..=self.rules.current_year)
            .rev()
            .collect()
    }

    pub fn genre_options(&self) -> Vec<String> {
        GENRE_OPTIONS.iter().map(|genre| genre.to_string()).collect()
    }

    /// Adds the genre if absent, removes it if present. Selection order is
    /// preserved for the chip display.
    pub fn toggle_genre(&self, genre: String) {
        self.form.update_field(fields::GENRE, move |draft| {
            if let Some(position) = draft.genre.iter().position(|g| g == &genre) {
                draft.genre.remove(position);
            } else {
                draft.genre.push(genre);
            }
        });
    }

    pub fn remove_genre(&self, genre: String) {
        self.form.update_field(fields::GENRE, move |draft| {
            draft.genre.retain(|g| g != &genre);
        });
    }
}

/// Result sink: pops the serialized record in a dialog, then the toast.
fn submit_book(draft: &BookDraft, toasts: ToastService) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(draft)
        .map_err(|e| format!("Could not serialize the book: {e}"))?;
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&payload);
    }
    toasts.show("Book has been submitted successfully!");
    log::info!("book submitted: {}", draft.title);
    Ok(())
}
