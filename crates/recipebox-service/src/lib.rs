//! # recipebox-service
//!
//! Business logic service layer for RecipeBox. Each service orchestrates
//! the recipe store, the feed cache, and the revalidation bus to implement
//! application-level use cases.
//!
//! Services follow constructor injection; all dependencies are provided
//! at construction time via `Arc` references.

pub mod category;
pub mod context;
pub mod feed;
pub mod recipe;
pub mod revalidation;
pub mod user;

pub use category::CategoryService;
pub use context::RequestContext;
pub use feed::FeedService;
pub use recipe::{RecipeInput, RecipeService};
pub use revalidation::{RevalidationBus, Revalidator};
pub use user::UserService;

#[cfg(test)]
pub(crate) mod test_support;
