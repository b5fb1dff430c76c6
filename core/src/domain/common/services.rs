use std::sync::Arc;

use crate::domain::ingredient::ports::{IngredientRepository, LLMClient};

pub struct Service<IR, LLM>
where
    IR: IngredientRepository,
    LLM: LLMClient,
{
    pub(crate) ingredient_repository: Arc<IR>,
    pub(crate) llm_client: Arc<LLM>,
}

impl<IR, LLM> Service<IR, LLM>
where
    IR: IngredientRepository,
    LLM: LLMClient,
{
    pub fn new(ingredient_repository: IR, llm_client: LLM) -> Self {
        Self {
            ingredient_repository: Arc::new(ingredient_repository),
            llm_client: Arc::new(llm_client),
        }
    }
}

impl<IR, LLM> Clone for Service<IR, LLM>
where
    IR: IngredientRepository,
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            ingredient_repository: Arc::clone(&self.ingredient_repository),
            llm_client: Arc::clone(&self.llm_client),
        }
    }
}
