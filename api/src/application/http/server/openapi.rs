use crate::application::http::{health::HealthApiDoc, ingredient::router::IngredientApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SINU Ingredient Checker API"
    ),
    nest(
        (path = "/api", api = IngredientApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
