// Storage layer for the chess players API
// Decision: Support both PostgreSQL (production) and in-memory (dev mode)
//
// - Database: sqlx repositories over PostgreSQL
// - InMemoryDatabase: the same API over in-process maps
// - StorageBackend: enum dispatch between the two, used by every handler

pub mod backend;
pub mod error;
pub mod memory;
pub mod models;
pub mod repositories;
pub mod seed;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::InMemoryDatabase;
pub use models::*;
pub use repositories::Database;
