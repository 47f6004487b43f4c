use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Selector for elements that belong to a dropdown (trigger or menu).
/// Presses inside a matching element never close anything, so the toggle
/// handler that runs on the subsequent click is not undone.
const DROPDOWN_SELECTOR: &str = "[data-dropdown]";

/// The dropdowns on the page. At most one is open at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DropdownId {
    Genre,
    PublishedYear,
    BirthYear,
}

/// Pure toggle transition: self-close when already open, otherwise switch to
/// `id` (implicitly closing whatever was open).
pub fn toggled(open: Option<DropdownId>, id: DropdownId) -> Option<DropdownId> {
    if open == Some(id) {
        None
    } else {
        Some(id)
    }
}

/// Tracks which single dropdown (if any) is open across the whole form
/// surface. Widgets go through this service; exclusivity holds because the
/// state is one `Option`, not one flag per dropdown.
#[derive(Clone, Copy)]
pub struct DropdownService {
    open: RwSignal<Option<DropdownId>>,
}

impl DropdownService {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(None),
        }
    }

    /// Opens exactly `id`, closing all others.
    pub fn open_only(&self, id: DropdownId) {
        self.open.set(Some(id));
    }

    pub fn toggle(&self, id: DropdownId) {
        self.open.update(|open| *open = toggled(*open, id));
    }

    pub fn close_all(&self) {
        self.open.set(None);
    }

    pub fn is_open(&self, id: DropdownId) -> bool {
        self.open.get() == Some(id)
    }

    /// Installs the document-level `mousedown` listener that closes every
    /// dropdown when a press lands outside any `data-dropdown` element.
    ///
    /// Returns an RAII watch that removes the listener when dropped; tie it
    /// to the owning component with `on_cleanup`. `None` outside a browser
    /// document (e.g. on the test host).
    pub fn watch_outside_clicks(&self) -> Option<OutsideClickWatch> {
        let document = web_sys::window()?.document()?;
        let svc = *self;
        let callback = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let inside = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .and_then(|element| element.closest(DROPDOWN_SELECTOR).ok().flatten())
                .is_some();
            if !inside {
                svc.close_all();
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        document
            .add_event_listener_with_callback("mousedown", callback.as_ref().unchecked_ref())
            .ok()?;

        Some(OutsideClickWatch { document, callback })
    }
}

impl Default for DropdownService {
    fn default() -> Self {
        Self::new()
    }
}

/// Document `mousedown` listener that removes itself when dropped.
pub struct OutsideClickWatch {
    document: web_sys::Document,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for OutsideClickWatch {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            "mousedown",
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
