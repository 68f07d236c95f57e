pub mod invalid_selection;
pub mod julia;
