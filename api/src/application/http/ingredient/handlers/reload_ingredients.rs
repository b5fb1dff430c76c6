use axum::extract::State;
use serde::{Deserialize, Serialize};
use sinu_core::domain::ingredient::ports::IngredientService;
use tracing::error;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ReloadIngredientsResponse {
    pub success: bool,
    pub count: usize,
}

#[utoipa::path(
    post,
    path = "/ingredients/reload",
    tag = "ingredient",
    summary = "Reload the ingredient database",
    description = "Operator endpoint, mounted only when INGREDIENT_RELOAD_ENABLED is set. Re-reads the CSV file. On failure the previously loaded table stays active.",
    responses(
        (status = 200, body = ReloadIngredientsResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn reload_ingredients(
    State(state): State<AppState>,
) -> Result<Response<ReloadIngredientsResponse>, ApiError> {
    let service = state.service.clone();
    let count = tokio::task::spawn_blocking(move || service.reload_ingredients())
        .await
        .map_err(|e| {
            error!("Ingredient reload task failed: {}", e);
            ApiError::InternalServerError("Ingredient reload failed".to_string())
        })?
        .map_err(ApiError::from)?;

    Ok(Response::OK(ReloadIngredientsResponse {
        success: true,
        count,
    }))
}
