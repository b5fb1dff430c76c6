use axum::extract::{Path, State};
use sinu_core::domain::ingredient::{entities::IngredientRecord, ports::IngredientService};

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[utoipa::path(
    get,
    path = "/ingredients/{name}",
    tag = "ingredient",
    summary = "Look up a single ingredient",
    description = "Returns the stored record, or an `Unknown` record when the name is not in the database",
    params(
        ("name" = String, Path, description = "Ingredient name, matched case-insensitively"),
    ),
    responses(
        (status = 200, body = IngredientRecord)
    ),
)]
pub async fn get_ingredient(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Response<IngredientRecord> {
    Response::OK(state.service.lookup_ingredient(&name))
}
