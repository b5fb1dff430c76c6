pub mod ingredient;
pub mod llm;
