//! # Postagem Infrastructure
//!
//! Concrete implementations of the ports defined in `postagem-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//!
//! Without `postgres` only the in-memory store is compiled.

pub mod database;
pub mod memory;

pub use database::DatabaseConnections;
pub use memory::InMemoryStore;

#[cfg(feature = "postgres")]
pub use database::{
    PostgresCategoryRepository, PostgresGenreRepository, PostgresPostRepository,
    PostgresUserRepository,
};
