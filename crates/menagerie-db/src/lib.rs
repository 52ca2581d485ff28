//! Persistence gateway for the Menagerie animal catalogue.
//!
//! All access to stored animals passes through [`AnimalStore`], which
//! dispatches to one of two backends:
//!
//! ```text
//! AnimalStore
//!     |
//!     +-- Postgres --> PgAnimalStore --> PostgresPool (sqlx PgPool)
//!     |
//!     +-- Memory ----> MemoryAnimalStore (RwLock<BTreeMap>)
//! ```
//!
//! # Modules
//!
//! - [`store`] -- The [`AnimalStore`] gateway (enum dispatch)
//! - [`animal_store`] -- `PostgreSQL` queries on the `animals` table
//! - [`memory`] -- In-memory backend for development and tests
//! - [`postgres`] -- `PostgreSQL` connection pool and configuration
//! - [`error`] -- Shared error types

pub mod animal_store;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

// Re-export primary types for convenience.
pub use animal_store::{AnimalRow, PgAnimalStore};
pub use error::DbError;
pub use memory::MemoryAnimalStore;
pub use postgres::{PostgresConfig, PostgresPool};
pub use store::AnimalStore;
