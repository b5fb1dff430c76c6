use serde_json::json;

/// Instruction sent alongside the label photo
pub const INGREDIENT_EXTRACTION_PROMPT: &str = "Extract ONLY cosmetic ingredient names as JSON array, like [\"Water\",\"Glycerin\"]. No explanation.";

/// Returns the JSON schema for ingredient extraction LLM responses
pub fn get_ingredient_list_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": { "type": "string" }
    })
}
