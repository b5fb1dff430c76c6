pub mod annotator;
pub mod csv_repository;

pub use csv_repository::CsvIngredientRepository;
