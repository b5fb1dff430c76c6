use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeIngredientNamesRequest {
    #[validate(length(
        min = 1,
        max = 500,
        message = "ingredients must contain between 1 and 500 names"
    ))]
    pub ingredients: Vec<String>,
}
