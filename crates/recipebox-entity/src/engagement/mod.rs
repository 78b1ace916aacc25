//! Like and favorite entities.

pub mod model;

pub use model::{Favorite, FavoriteState, Like, LikeState};
