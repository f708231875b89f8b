pub mod show;
pub mod user;
