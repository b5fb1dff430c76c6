use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::{
        entities::IngredientRecord,
        ports::{IngredientRepository, IngredientService, LLMClient},
        sanitizer::extract_ingredient_names,
        schema::{INGREDIENT_EXTRACTION_PROMPT, get_ingredient_list_schema},
        value_objects::{AnalyzeImageInput, IngredientAnalysis},
    },
};

impl<IR, LLM> IngredientService for Service<IR, LLM>
where
    IR: IngredientRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self, input), fields(image_size = input.image_data.len(), mime_type = %input.mime_type))]
    async fn analyze_image(
        &self,
        input: AnalyzeImageInput,
    ) -> Result<IngredientAnalysis, CoreError> {
        if input.image_data.is_empty() {
            return Err(CoreError::Invalid);
        }

        let raw_response = self
            .llm_client
            .generate_with_image(
                INGREDIENT_EXTRACTION_PROMPT.to_string(),
                input.image_data,
                input.mime_type,
                get_ingredient_list_schema(),
            )
            .await?;

        let names = extract_ingredient_names(&raw_response);
        tracing::info!(extracted = names.len(), "Extracted ingredient names from image");

        self.analyze_names(names)
    }

    fn analyze_names(&self, names: Vec<String>) -> Result<IngredientAnalysis, CoreError> {
        if names.is_empty() {
            return Err(CoreError::NoIngredientsExtracted);
        }

        let records = names
            .iter()
            .map(|name| self.ingredient_repository.lookup(name))
            .collect();

        Ok(IngredientAnalysis::from_records(records))
    }

    fn lookup_ingredient(&self, name: &str) -> IngredientRecord {
        self.ingredient_repository.lookup(name)
    }

    fn ingredient_count(&self) -> usize {
        self.ingredient_repository.count()
    }

    #[instrument(skip(self))]
    fn reload_ingredients(&self) -> Result<usize, CoreError> {
        let count = self.ingredient_repository.reload()?;
        tracing::info!(count, "Ingredient database reloaded");
        Ok(count)
    }
}
