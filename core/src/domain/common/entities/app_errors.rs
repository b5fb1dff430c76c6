use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Could not read ingredients")]
    NoIngredientsExtracted,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("External service timed out")]
    ExternalServiceTimeout,

    #[error("Ingredient database error: {0}")]
    IngredientDatabase(String),

    #[error("Invalid input")]
    Invalid,
}
