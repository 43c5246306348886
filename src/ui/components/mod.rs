pub mod date_input;
pub mod prompt;
pub mod selection;
