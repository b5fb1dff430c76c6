use super::handlers::{
    analyze_ingredient_image::{
        __path_analyze_ingredient_image, MAX_IMAGE_SIZE, analyze_ingredient_image,
    },
    analyze_ingredient_names::{__path_analyze_ingredient_names, analyze_ingredient_names},
    get_ingredient::{__path_get_ingredient, get_ingredient},
    reload_ingredients::{__path_reload_ingredients, reload_ingredients},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

// Room for multipart framing around a maximum-size image
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(
    analyze_ingredient_image,
    analyze_ingredient_names,
    get_ingredient,
    reload_ingredients
))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    let router = Router::new()
        .route(
            &format!("{}/api/analyze", state.args.server.root_path),
            post(analyze_ingredient_image)
                .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + MULTIPART_OVERHEAD)),
        )
        .route(
            &format!("{}/api/analyze/names", state.args.server.root_path),
            post(analyze_ingredient_names),
        )
        .route(
            &format!("{}/api/ingredients/{{name}}", state.args.server.root_path),
            get(get_ingredient),
        );

    if !state.args.ingredients.reload_enabled {
        return router;
    }

    router.route(
        &format!("{}/api/ingredients/reload", state.args.server.root_path),
        post(reload_ingredients),
    )
}
