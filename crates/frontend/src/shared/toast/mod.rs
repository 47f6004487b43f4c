use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long a toast stays fully visible before it starts fading.
pub const TOAST_VISIBLE_MS: u32 = 2700;
/// Fade-out duration; visible + fade = the full 3000 ms window.
pub const TOAST_FADE_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Hidden,
    Showing,
    FadingOut,
}

/// Toast state machine.
///
/// Every `show` bumps the epoch; scheduled transitions carry the epoch they
/// were scheduled under and are rejected once stale, so a superseded timer
/// can never flash or hide the wrong message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastModel {
    epoch: u64,
    message: String,
    phase: ToastPhase,
}

impl ToastModel {
    pub fn new() -> Self {
        Self {
            epoch: 0,
            message: String::new(),
            phase: ToastPhase::Hidden,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// Starts showing `message`, superseding any pending transitions.
    /// Returns the epoch the caller must present to advance this toast.
    pub fn show(&mut self, message: String) -> u64 {
        self.epoch += 1;
        self.message = message;
        self.phase = ToastPhase::Showing;
        self.epoch
    }

    /// Showing -> FadingOut. No-op (returns false) for a stale epoch.
    pub fn begin_fade(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.phase = ToastPhase::FadingOut;
        true
    }

    /// FadingOut -> Hidden, clearing the message. No-op for a stale epoch.
    pub fn finish(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.phase = ToastPhase::Hidden;
        self.message.clear();
        true
    }
}

impl Default for ToastModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient-notification service, provided once via context.
#[derive(Clone, Copy)]
pub struct ToastService {
    model: RwSignal<ToastModel>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            model: RwSignal::new(ToastModel::new()),
        }
    }

    /// Shows `message` immediately, then fades it out after
    /// [`TOAST_VISIBLE_MS`] and hides it after a further [`TOAST_FADE_MS`].
    ///
    /// A call while a toast is in flight restarts the whole sequence with
    /// the new message; the superseded task goes inert at its next epoch
    /// check and never mutates state again.
    pub fn show(&self, message: impl Into<String>) {
        let mut epoch = 0;
        self.model.update(|m| epoch = m.show(message.into()));

        let svc = *self;
        spawn_local(async move {
            // try_update: the signal may already be disposed with the owning
            // scope by the time a timer fires; the task just goes inert then.
            TimeoutFuture::new(TOAST_VISIBLE_MS).await;
            let live = svc.model.try_update(|m| m.begin_fade(epoch));
            if live != Some(true) {
                return;
            }
            TimeoutFuture::new(TOAST_FADE_MS).await;
            let _ = svc.model.try_update(|m| m.finish(epoch));
        });
    }

    pub fn phase(&self) -> ToastPhase {
        self.model.with(|m| m.phase())
    }

    pub fn message(&self) -> String {
        self.model.with(|m| m.message().to_string())
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the current toast, if any.
///
/// Must be mounted exactly once, at the application root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");

    view! {
        <Show when=move || toasts.phase() != ToastPhase::Hidden>
            <div class=move || {
                if toasts.phase() == ToastPhase::Showing {
                    "toast toast--visible"
                } else {
                    "toast toast--fading"
                }
            }>{move || toasts.message()}</div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_then_fade_then_hidden() {
        let mut toast = ToastModel::new();
        let epoch = toast.show("Book has been submitted successfully!".to_string());

        assert_eq!(toast.phase(), ToastPhase::Showing);
        assert!(toast.begin_fade(epoch));
        assert_eq!(toast.phase(), ToastPhase::FadingOut);
        assert!(toast.finish(epoch));
        assert_eq!(toast.phase(), ToastPhase::Hidden);
        assert_eq!(toast.message(), "");
    }

    #[test]
    fn new_show_supersedes_pending_transitions() {
        let mut toast = ToastModel::new();
        let first = toast.show("A".to_string());
        let second = toast.show("B".to_string());

        // The first toast's timers fire afterwards and must not take effect.
        assert!(!toast.begin_fade(first));
        assert_eq!(toast.phase(), ToastPhase::Showing);
        assert_eq!(toast.message(), "B");
        assert!(!toast.finish(first));
        assert_eq!(toast.message(), "B");

        // Only the second toast's epoch advances the machine.
        assert!(toast.begin_fade(second));
        assert!(toast.finish(second));
        assert_eq!(toast.phase(), ToastPhase::Hidden);
    }

    #[test]
    fn stale_finish_after_restart_does_not_hide_early() {
        let mut toast = ToastModel::new();
        let first = toast.show("A".to_string());
        assert!(toast.begin_fade(first));

        // Restart mid-fade: the new message shows fully again.
        let second = toast.show("B".to_string());
        assert_eq!(toast.phase(), ToastPhase::Showing);

        // First toast's final timer fires; "B" must stay visible.
        assert!(!toast.finish(first));
        assert_eq!(toast.phase(), ToastPhase::Showing);
        assert_eq!(toast.message(), "B");

        assert!(toast.begin_fade(second));
        assert!(toast.finish(second));
    }
}
