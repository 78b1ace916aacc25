//! # recipebox-database
//!
//! PostgreSQL connection management, per-table repositories, and the
//! [`RecipeStore`] persistence gateway with PostgreSQL and in-memory
//! implementations.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod postgres;
pub mod query;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use query::{CardOrder, CardPage, CardQuery, CardScope};
pub use store::RecipeStore;
