//! Route handlers organized by domain.

pub mod category;
pub mod feed;
pub mod health;
pub mod like;
pub mod recipe;
pub mod user;
