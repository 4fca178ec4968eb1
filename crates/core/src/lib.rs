// Chess players domain
//
// DB-agnostic entity types shared by the API server and the seed tooling,
// plus the tracing initialisation every binary uses.

pub mod category;
pub mod player;
pub mod telemetry;
pub mod user;

pub use category::Category;
pub use player::ChessPlayer;
pub use user::{User, UserId};
