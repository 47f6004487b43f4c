use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use contracts::domain::validation::{FieldErrors, SUBMIT};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::state::FormState;

type ValidateFn<T> = Arc<dyn Fn(&T) -> FieldErrors + Send + Sync>;
type SubmitFn<T> =
    Arc<dyn Fn(T) -> Pin<Box<dyn Future<Output = Result<(), String>>>> + Send + Sync>;

/// Reactive form controller, parameterized over the record shape, an initial
/// value, a validate function and a submit callback.
///
/// One controller serves every form on the page; concrete forms differ only
/// in what they inject. Clone it into each closure, view-model style.
#[derive(Clone)]
pub struct FormController<T: Clone + Send + Sync + 'static> {
    state: RwSignal<FormState<T>>,
    initial: T,
    validate: ValidateFn<T>,
    submit: SubmitFn<T>,
}

impl<T: Clone + Send + Sync + 'static> FormController<T> {
    /// `submit` may finish synchronously (wrap the result in `async move`)
    /// or suspend; `submitting` is true for its full duration either way.
    pub fn new<V, S, Fut>(initial: T, validate: V, submit: S) -> Self
    where
        V: Fn(&T) -> FieldErrors + Send + Sync + 'static,
        S: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), String>> + 'static,
    {
        Self {
            state: RwSignal::new(FormState::new(initial.clone())),
            initial,
            validate: Arc::new(validate),
            submit: Arc::new(move |values| {
                Box::pin(submit(values)) as Pin<Box<dyn Future<Output = Result<(), String>>>>
            }),
        }
    }

    pub fn with_values<U>(&self, read: impl Fn(&T) -> U) -> U {
        self.state.with(|s| read(&s.values))
    }

    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.state.with(|s| s.errors.get(field).cloned())
    }

    pub fn submit_error(&self) -> Option<String> {
        self.field_error(SUBMIT)
    }

    pub fn submitting(&self) -> bool {
        self.state.with(|s| s.submitting)
    }

    /// Field edit entry point; see [`FormState::apply_change`].
    pub fn update_field(&self, field: &'static str, mutate: impl FnOnce(&mut T)) {
        let validate = Arc::clone(&self.validate);
        self.state
            .update(|s| s.apply_change(field, mutate, |values| (*validate)(values)));
    }

    /// Validates and, when clean, runs the injected submit callback with a
    /// copy of the current values.
    pub fn handle_submit(&self) {
        let validate = Arc::clone(&self.validate);
        let mut accepted = false;
        self.state
            .update(|s| accepted = s.begin_submit(|values| (*validate)(values)));
        if !accepted {
            return;
        }

        let this = self.clone();
        spawn_local(async move {
            let values = this.state.with_untracked(|s| s.values.clone());
            let outcome = (this.submit.as_ref())(values).await;
            if let Err(message) = &outcome {
                log::debug!("form submit failed: {message}");
            }
            let initial = this.initial.clone();
            this.state.update(|s| s.finish_submit(outcome, initial));
        });
    }
}
