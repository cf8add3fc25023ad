//! Output formatting for terminal and JSON modes

pub mod json;
pub mod terminal;
