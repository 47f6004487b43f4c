use contracts::domain::validation::{FieldErrors, SUBMIT};

/// Form state machine: field values, per-field errors and the
/// submission-in-flight flag.
///
/// Pure and synchronous; [`FormController`](super::FormController) wraps it
/// in a signal and drives the async submit path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState<T> {
    pub values: T,
    pub errors: FieldErrors,
    pub submitting: bool,
}

impl<T> FormState<T> {
    pub fn new(values: T) -> Self {
        Self {
            values,
            errors: FieldErrors::new(),
            submitting: false,
        }
    }

    /// Applies an edit to one field.
    ///
    /// If that field currently shows an error, the updated record is
    /// re-validated and only that field's entry is cleared once it passes.
    /// Errors on other fields are never touched here.
    pub fn apply_change(
        &mut self,
        field: &'static str,
        mutate: impl FnOnce(&mut T),
        validate: impl Fn(&T) -> FieldErrors,
    ) {
        mutate(&mut self.values);
        if self.errors.contains_key(field) && !validate(&self.values).contains_key(field) {
            self.errors.remove(field);
        }
    }

    /// Full validation pass before submitting.
    ///
    /// Returns true when the record is clean; `submitting` is then set and
    /// stays set until [`finish_submit`](Self::finish_submit). On a dirty
    /// record the errors are stored and `submitting` stays false.
    pub fn begin_submit(&mut self, validate: impl Fn(&T) -> FieldErrors) -> bool {
        self.errors.clear();
        let errors = validate(&self.values);
        if !errors.is_empty() {
            self.errors = errors;
            return false;
        }
        self.submitting = true;
        true
    }

    /// Records the submit callback outcome.
    ///
    /// Success resets the values to `initial` and clears the errors; failure
    /// surfaces the message under the synthetic `submit` key and keeps the
    /// entered values. Both outcomes clear `submitting`.
    pub fn finish_submit(&mut self, outcome: Result<(), String>, initial: T) {
        match outcome {
            Ok(()) => {
                self.values = initial;
                self.errors.clear();
            }
            Err(message) => {
                self.errors.insert(SUBMIT, message);
            }
        }
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::author::{self, validate_author, AuthorDraft, AuthorRules};
    use contracts::domain::book::{self, validate_book, BookDraft, BookRules};

    const BOOK_RULES: BookRules = BookRules {
        min_published_year: 1800,
        current_year: 2026,
    };
    const AUTHOR_RULES: AuthorRules = AuthorRules {
        min_birth_year: 1900,
        min_name_len: 2,
        current_year: 2026,
    };

    fn book_validate(draft: &BookDraft) -> FieldErrors {
        validate_book(draft, &BOOK_RULES)
    }

    fn author_validate(draft: &AuthorDraft) -> FieldErrors {
        validate_author(draft, &AUTHOR_RULES)
    }

    #[test]
    fn change_clears_only_the_edited_fields_error() {
        let mut state = FormState::new(BookDraft::default());
        assert!(!state.begin_submit(book_validate));
        assert_eq!(state.errors.len(), 3);

        state.apply_change(
            book::fields::TITLE,
            |d| d.title = "Dune".to_string(),
            book_validate,
        );
        assert!(!state.errors.contains_key(book::fields::TITLE));
        assert!(state.errors.contains_key(book::fields::GENRE));
        assert!(state.errors.contains_key(book::fields::PUBLISHED_YEAR));
    }

    #[test]
    fn change_keeps_error_while_field_is_still_invalid() {
        let mut state = FormState::new(BookDraft::default());
        state.begin_submit(book_validate);

        state.apply_change(
            book::fields::PUBLISHED_YEAR,
            |d| d.published_year = "17".to_string(),
            book_validate,
        );
        assert!(state.errors.contains_key(book::fields::PUBLISHED_YEAR));
    }

    #[test]
    fn repeated_identical_change_is_idempotent() {
        let mut state = FormState::new(BookDraft::default());
        state.begin_submit(book_validate);

        for _ in 0..2 {
            state.apply_change(
                book::fields::TITLE,
                |d| d.title = "Dune".to_string(),
                book_validate,
            );
        }
        assert_eq!(state.values.title, "Dune");
        // A cleared error is not reintroduced by the second change.
        assert!(!state.errors.contains_key(book::fields::TITLE));
    }

    #[test]
    fn successful_submit_resets_to_initial() {
        let mut state = FormState::new(BookDraft {
            title: "Dune".to_string(),
            genre: vec!["Science Fiction".to_string()],
            published_year: "1965".to_string(),
        });

        assert!(state.begin_submit(book_validate));
        assert!(state.submitting);
        let submitted = state.values.clone();
        assert_eq!(submitted.title, "Dune");

        state.finish_submit(Ok(()), BookDraft::default());
        assert_eq!(state.values, BookDraft::default());
        assert!(state.errors.is_empty());
        assert!(!state.submitting);
    }

    #[test]
    fn failed_callback_keeps_values_and_sets_submit_error() {
        let mut state = FormState::new(BookDraft {
            title: "Dune".to_string(),
            genre: vec!["Science Fiction".to_string()],
            published_year: "1965".to_string(),
        });

        assert!(state.begin_submit(book_validate));
        state.finish_submit(Err("display failed".to_string()), BookDraft::default());

        assert_eq!(state.values.title, "Dune");
        assert_eq!(
            state.errors.get(SUBMIT).map(String::as_str),
            Some("display failed")
        );
        assert!(!state.submitting);
    }

    #[test]
    fn invalid_author_never_reaches_the_callback() {
        let mut state = FormState::new(AuthorDraft {
            first_name: String::new(),
            last_name: "Asimov".to_string(),
            birth_year: "1920".to_string(),
        });

        assert!(!state.begin_submit(author_validate));
        assert!(state.errors.contains_key(author::fields::FIRST_NAME));
        assert!(!state.submitting);
        // Values stay as entered for the user to fix.
        assert_eq!(state.values.last_name, "Asimov");
    }
}
