// Services layer for business logic
// Services own business logic, calling storage directly

pub mod category;
pub mod player;

pub use category::CategoryService;
pub use player::PlayerService;
