//! Domain rules that do not touch the database.

pub mod genre;
pub mod show_update;

pub use genre::Genre;
pub use show_update::{FieldError, ShowUpdate, ShowUpdateRequest};
