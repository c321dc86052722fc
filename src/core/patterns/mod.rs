pub mod catalog;
pub mod definition;
pub mod errors;
pub mod recipe;
