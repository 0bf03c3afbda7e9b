//! # gestion-salles-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `gestion-salles-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `gestion-salles-app` (for port traits) and `gestion-salles-domain`
//! (for domain types). The `app` and `domain` crates must never reference this adapter.

mod error;
mod pool;
mod salle_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use salle_repo::SqliteSalleRepository;
