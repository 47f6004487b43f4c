pub mod components;
pub mod dropdown;
pub mod form;
pub mod toast;
