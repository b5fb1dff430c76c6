use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ingredient::entities::IngredientRecord;

pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone)]
pub struct AnalyzeImageInput {
    pub image_data: Vec<u8>,
    pub mime_type: String,
}

/// Looked-up ingredients split into everything and the flagged subset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngredientAnalysis {
    pub all_ingredients: Vec<IngredientRecord>,
    pub concern_ingredients: Vec<IngredientRecord>,
    pub has_concerns: bool,
    pub total_count: usize,
    pub concern_count: usize,
}

impl IngredientAnalysis {
    pub fn from_records(records: Vec<IngredientRecord>) -> Self {
        let concern_ingredients: Vec<IngredientRecord> = records
            .iter()
            .filter(|record| record.has_concerns())
            .cloned()
            .collect();

        Self {
            total_count: records.len(),
            concern_count: concern_ingredients.len(),
            has_concerns: !concern_ingredients.is_empty(),
            all_ingredients: records,
            concern_ingredients,
        }
    }
}
