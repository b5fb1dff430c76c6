use crate::{
    domain::common::{SinuConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{ingredient::CsvIngredientRepository, llm::VisionLLMClient},
};

pub type SinuService = Service<CsvIngredientRepository, VisionLLMClient>;

pub fn create_service(config: SinuConfig) -> Result<SinuService, CoreError> {
    let ingredient_repository = CsvIngredientRepository::load(&config.ingredients.csv_path)?;
    let llm_client = VisionLLMClient::from_config(&config.llm)?;

    Ok(Service::new(ingredient_repository, llm_client))
}
