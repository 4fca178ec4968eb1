// HTTP API routes
//
// This module contains all HTTP route handlers for the public API.
// Each resource submodule has its own AppState.

pub mod categories;
pub mod common;
pub mod players;
pub mod protected;
pub mod validation;

// Re-export common types
pub use common::{ErrorResponse, ListResponse};
