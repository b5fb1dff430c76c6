pub mod common;
pub mod ingredient;
