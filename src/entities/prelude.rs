pub use super::shows::Entity as Shows;
pub use super::user_shows::Entity as UserShows;
pub use super::users::Entity as Users;
