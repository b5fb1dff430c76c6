use axum::{Json, extract::State};
use sinu_core::domain::ingredient::ports::IngredientService;
use validator::Validate;

use crate::application::http::{
    ingredient::{
        handlers::analyze_ingredient_image::AnalyzeIngredientsResponse,
        validators::AnalyzeIngredientNamesRequest,
    },
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/analyze/names",
    tag = "ingredient",
    summary = "Analyze a list of ingredient names",
    description = "Looks up already-known ingredient names without calling the vision model",
    request_body = AnalyzeIngredientNamesRequest,
    responses(
        (status = 200, body = AnalyzeIngredientsResponse),
        (status = 400, body = ApiErrorResponse)
    ),
)]
pub async fn analyze_ingredient_names(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeIngredientNamesRequest>,
) -> Result<Response<AnalyzeIngredientsResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let names = payload
        .ingredients
        .into_iter()
        .filter(|name| !name.trim().is_empty())
        .collect();

    let analysis = state
        .service
        .analyze_names(names)
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeIngredientsResponse::from(analysis)))
}
