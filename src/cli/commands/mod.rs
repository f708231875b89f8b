mod list;
mod seed;

pub use list::{cmd_list_shows, cmd_list_users};
pub use seed::cmd_seed;
