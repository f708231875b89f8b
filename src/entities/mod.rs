pub mod prelude;

pub mod shows;
pub mod user_shows;
pub mod users;
