//! Recipe visibility enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a recipe is listed in the public feed and accepts likes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "recipe_visibility", rename_all = "lowercase")]
#[serde(rename_all = "UPPERCASE")]
pub enum Visibility {
    /// Visible only to the owner.
    #[default]
    Private,
    /// Listed in the public feed.
    Public,
}

impl Visibility {
    /// Map the form's "is public" flag to a visibility.
    pub fn from_public_flag(is_public: bool) -> Self {
        if is_public { Self::Public } else { Self::Private }
    }

    /// The opposite visibility.
    pub fn toggled(self) -> Self {
        match self {
            Self::Public => Self::Private,
            Self::Private => Self::Public,
        }
    }

    /// Check if the recipe is public.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }

    /// Return the visibility as an uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::Private => "PRIVATE",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = recipebox_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            _ => Err(recipebox_core::AppError::validation(format!(
                "Invalid visibility: '{s}'. Expected one of: PUBLIC, PRIVATE"
            ))),
        }
    }
}
