use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of genres a show can carry.
///
/// Stored in the `shows.genre` column as the canonical name returned by
/// [`Genre::as_str`]; lookups from user input go through [`Genre::parse`],
/// which ignores case.
///
/// # Examples
///
/// ```rust
/// use watchlist::domain::Genre;
///
/// assert_eq!(Genre::parse("COMEDY"), Some(Genre::Comedy));
/// assert_eq!(Genre::parse("sitcom").map(Genre::as_str), Some("Sitcom"));
/// assert_eq!(Genre::parse("Western"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Comedy,
    Drama,
    Horror,
    Sitcom,
}

impl Genre {
    /// Every genre, in declaration order.
    pub const ALL: [Self; 4] = [Self::Comedy, Self::Drama, Self::Horror, Self::Sitcom];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comedy => "Comedy",
            Self::Drama => "Drama",
            Self::Horror => "Horror",
            Self::Sitcom => "Sitcom",
        }
    }

    /// Case-insensitive lookup by name. Both sides are lowercased before
    /// comparing, so `"drama"`, `"Drama"` and `"DRAMA"` all resolve.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let wanted = name.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|genre| genre.as_str().to_lowercase() == wanted)
    }

    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|genre| genre.as_str()).collect()
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
