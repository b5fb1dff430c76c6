pub mod analyze_ingredient_image;
pub mod analyze_ingredient_names;
pub mod get_ingredient;
pub mod reload_ingredients;
