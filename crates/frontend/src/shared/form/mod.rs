mod controller;
mod state;

pub use controller::FormController;
pub use state::FormState;
