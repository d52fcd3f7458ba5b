pub mod catalog;
pub mod protocol;
