// User domain types
//
// The password hash never leaves the storage/auth layers, so the public
// User type only carries identity.

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Identifier of a registered user. This is the subject claim of every token.
pub type UserId = i64;

/// A registered user as exposed over the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct User {
    pub id: UserId,
    pub email: String,
}
