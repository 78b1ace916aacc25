//! Ordering options for the public feed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Public feed ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedSort {
    /// Newest first.
    #[default]
    Recent,
    /// Most liked first, ties broken by newest first.
    Popular,
}

impl FeedSort {
    /// Parse a query value. Anything other than `"popular"` means [`FeedSort::Recent`].
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("popular") => Self::Popular,
            _ => Self::Recent,
        }
    }

    /// Key segment used when caching feed pages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Popular => "popular",
        }
    }
}

impl fmt::Display for FeedSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
