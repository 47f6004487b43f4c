use contracts::domain::author::{validate_author, AuthorDraft, AuthorRules};

use crate::shared::form::FormController;
use crate::shared::toast::ToastService;

/// ViewModel for the author entry form.
#[derive(Clone)]
pub struct AuthorDetailsViewModel {
    pub form: FormController<AuthorDraft>,
    rules: AuthorRules,
}

impl AuthorDetailsViewModel {
    pub fn new(current_year: i32, toasts: ToastService) -> Self {
        let rules = AuthorRules::for_year(current_year);
        let form = FormController::new(
            AuthorDraft::default(),
            move |draft: &AuthorDraft| validate_author(draft, &rules),
            move |draft: AuthorDraft| async move { submit_author(&draft, toasts) },
        );
        Self { form, rules }
    }

    /// Years offered by the birth-year dropdown, newest first.
    pub fn year_options(&self) -> Vec<i32> {
        (self.rules.min_birth_year..=self.rules.current_year)
            .rev()
            .collect()
    }
}

/// Result sink: pops the serialized record in a dialog, then the toast.
fn submit_author(draft: &AuthorDraft, toasts: ToastService) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(draft)
        .map_err(|e| format!("Could not serialize the author: {e}"))?;
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&payload);
    }
    toasts.show("Author has been submitted successfully!");
    log::info!("author submitted: {} {}", draft.first_name, draft.last_name);
    Ok(())
}
