//! Core traits defined in `recipebox-core` and implemented by other crates.

pub mod cache;

pub use cache::CacheProvider;
