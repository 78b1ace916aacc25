//! Recipe domain entities and read models.

pub mod card;
pub mod model;
pub mod visibility;

pub use card::{RecipeCard, RecipeDetail};
pub use model::{NewRecipe, Recipe, RecipeUpdate};
pub use visibility::Visibility;
