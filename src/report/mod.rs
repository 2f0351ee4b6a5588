pub mod csv;
pub mod finding;
pub mod json;
pub mod terminal;
