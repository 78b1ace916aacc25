//! # recipebox-entity
//!
//! Domain entity models for RecipeBox. Every struct in this crate
//! represents a database table row, a read model assembled from several
//! tables, or a domain value object. All entities derive `Debug`, `Clone`,
//! `Serialize`, `Deserialize`, and database rows additionally derive
//! `sqlx::FromRow`.

pub mod category;
pub mod engagement;
pub mod recipe;
pub mod tag;
pub mod user;
