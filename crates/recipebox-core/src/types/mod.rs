//! Core type definitions used across the RecipeBox workspace.

pub mod pagination;
pub mod sorting;

pub use pagination::{PageRequest, PageResponse};
pub use sorting::FeedSort;
