use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::IngredientRecord,
        value_objects::{AnalyzeImageInput, IngredientAnalysis},
    },
};

/// Read access to the ingredient knowledge base
#[cfg_attr(test, mockall::automock)]
pub trait IngredientRepository: Send + Sync {
    /// Returns the stored record, or the "not found" fallback
    fn lookup(&self, name: &str) -> IngredientRecord;

    /// Number of distinct ingredients currently loaded
    fn count(&self) -> usize;

    /// Re-reads the backing source and swaps the table in; returns the new size
    fn reload(&self) -> Result<usize, CoreError>;
}

/// LLM Client trait for calling vision models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for ingredient analysis business logic
#[cfg_attr(test, mockall::automock)]
pub trait IngredientService: Send + Sync {
    fn analyze_image(
        &self,
        input: AnalyzeImageInput,
    ) -> impl Future<Output = Result<IngredientAnalysis, CoreError>> + Send;

    fn analyze_names(&self, names: Vec<String>) -> Result<IngredientAnalysis, CoreError>;

    fn lookup_ingredient(&self, name: &str) -> IngredientRecord;

    fn ingredient_count(&self) -> usize;

    fn reload_ingredients(&self) -> Result<usize, CoreError>;
}
