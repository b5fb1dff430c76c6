use axum::{
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use sinu_core::domain::ingredient::{
    entities::IngredientRecord,
    ports::IngredientService,
    value_objects::{AnalyzeImageInput, DEFAULT_IMAGE_MIME_TYPE, IngredientAnalysis},
};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse, NO_FILE_UPLOADED},
        response::Response,
    },
    app_state::AppState,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

fn image_too_large() -> ApiError {
    ApiError::PayloadTooLarge(format!(
        "Image too large. Max size is {} bytes",
        MAX_IMAGE_SIZE
    ))
}

/// The body limit surfaces as a multipart error while streaming, so keep its 413
fn multipart_error(context: &str, e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        warn!("{}: body exceeds the upload limit", context);
        return image_too_large();
    }

    error!("{}: {}", context, e);
    ApiError::BadRequest(format!("{}: {}", context, e))
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeIngredientsResponse {
    pub success: bool,
    pub all_ingredients: Vec<IngredientRecord>,
    pub concern_ingredients: Vec<IngredientRecord>,
    pub has_concerns: bool,
    pub total_count: usize,
    pub concern_count: usize,
}

impl From<IngredientAnalysis> for AnalyzeIngredientsResponse {
    fn from(analysis: IngredientAnalysis) -> Self {
        Self {
            success: true,
            all_ingredients: analysis.all_ingredients,
            concern_ingredients: analysis.concern_ingredients,
            has_concerns: analysis.has_concerns,
            total_count: analysis.total_count,
            concern_count: analysis.concern_count,
        }
    }
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "ingredient",
    summary = "Analyze ingredients from a label photo",
    description = "Reads ingredient names from the uploaded image with a vision model and flags ingredients of concern",
    request_body(content_type = "multipart/form-data", description = "Form with an `image` file field"),
    responses(
        (status = 200, body = AnalyzeIngredientsResponse),
        (status = 400, body = ApiErrorResponse, description = "No file uploaded or no ingredients could be read"),
        (status = 413, body = ApiErrorResponse, description = "Image too large"),
        (status = 502, body = ApiErrorResponse, description = "Vision service failed"),
        (status = 504, body = ApiErrorResponse, description = "Vision service timed out")
    ),
)]
pub async fn analyze_ingredient_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeIngredientsResponse>, ApiError> {
    let mut image: Option<AnalyzeImageInput> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart field", e))?
    {
        if field.name() != Some("image") {
            continue;
        }

        if field.file_name().is_none_or(str::is_empty) {
            warn!("Image field without a filename");
            continue;
        }

        let mime_type = field
            .content_type()
            .filter(|content_type| content_type.starts_with("image/"))
            .unwrap_or(DEFAULT_IMAGE_MIME_TYPE)
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Failed to read image", e))?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(image_too_large());
        }

        if data.is_empty() {
            warn!("Empty image upload attempted");
            continue;
        }

        image = Some(AnalyzeImageInput {
            image_data: data.to_vec(),
            mime_type,
        });
    }

    let image = image.ok_or_else(|| ApiError::BadRequest(NO_FILE_UPLOADED.to_string()))?;

    let analysis = state
        .service
        .analyze_image(image)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeIngredientsResponse::from(analysis)))
}
