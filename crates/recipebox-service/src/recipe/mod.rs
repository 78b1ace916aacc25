//! Recipe mutation operations.

pub mod input;
pub mod service;

pub use input::RecipeInput;
pub use service::RecipeService;
