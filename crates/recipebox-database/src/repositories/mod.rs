//! Repository implementations for all RecipeBox tables.

pub mod category;
pub mod engagement;
pub mod feed;
pub mod recipe;
pub mod tag;
pub mod user;

pub use category::CategoryRepository;
pub use engagement::EngagementRepository;
pub use feed::FeedRepository;
pub use recipe::RecipeRepository;
pub use tag::TagRepository;
pub use user::UserRepository;
