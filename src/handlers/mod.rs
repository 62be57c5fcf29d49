pub mod home;
pub mod health;
pub mod ready;
pub mod users;
pub mod items;
pub mod env;

pub use home::{home_handler, not_found_handler};
pub use health::health_handler;
pub use ready::ready_handler;
pub use users::users_handler;
pub use items::items_handler;
pub use env::env_handler;
