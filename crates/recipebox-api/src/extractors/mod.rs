//! Custom Axum extractors.

pub mod auth;
pub mod body;
pub mod path;
pub mod query;

pub use auth::Caller;
pub use body::json_body;
pub use path::parse_recipe_id;
pub use query::{FeedParams, LimitParams, MineParams};
