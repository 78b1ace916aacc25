//! # recipebox-core
//!
//! Core crate for RecipeBox. Contains configuration schemas, the cache
//! provider trait, revalidation events, pagination/sorting types, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other RecipeBox crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
