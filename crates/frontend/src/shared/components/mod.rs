mod multi_select;
mod text_input;
mod year_select;

pub use multi_select::MultiSelectDropdown;
pub use text_input::TextInput;
pub use year_select::YearDropdown;
