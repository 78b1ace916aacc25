//! Query descriptions for recipe card listings.
//!
//! Every list the application renders (public feed, recent, popular, the
//! caller's own recipes, favorites) is a [`CardQuery`]: a scope, an
//! optional search text, an ordering, and a window.

use uuid::Uuid;

use recipebox_core::types::FeedSort;
use recipebox_entity::recipe::RecipeCard;

/// Which recipes a listing draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardScope {
    /// Every PUBLIC recipe.
    Public,
    /// Every recipe owned by the user, any visibility.
    OwnedBy(Uuid),
    /// Every recipe the user has favorited, any visibility.
    FavoritedBy(Uuid),
}

/// Listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOrder {
    /// `created_at` descending.
    Newest,
    /// Like count descending, then `created_at` descending.
    MostLiked,
    /// `updated_at` descending.
    RecentlyUpdated,
}

impl From<FeedSort> for CardOrder {
    fn from(sort: FeedSort) -> Self {
        match sort {
            FeedSort::Recent => Self::Newest,
            FeedSort::Popular => Self::MostLiked,
        }
    }
}

/// A recipe card listing request.
#[derive(Debug, Clone)]
pub struct CardQuery {
    /// The viewer for the liked/favorited overlays. `None` for anonymous.
    pub viewer: Option<Uuid>,
    /// Source set.
    pub scope: CardScope,
    /// Trimmed, non-empty search text, matched case-insensitively against
    /// title and content.
    pub search: Option<String>,
    /// Ordering.
    pub order: CardOrder,
    /// Maximum number of cards to return. `None` returns every match.
    pub limit: Option<u64>,
    /// Number of matching cards to skip.
    pub offset: u64,
}

impl CardQuery {
    /// Start an unwindowed, anonymous, unfiltered query over `scope`.
    pub fn new(scope: CardScope, order: CardOrder) -> Self {
        Self {
            viewer: None,
            scope,
            search: None,
            order,
            limit: None,
            offset: 0,
        }
    }

    /// Set the overlay viewer.
    pub fn viewer(mut self, viewer: Option<Uuid>) -> Self {
        self.viewer = viewer;
        self
    }

    /// Set the search text. Blank text means no filter.
    pub fn search(mut self, search: Option<&str>) -> Self {
        self.search = normalize_search(search);
        self
    }

    /// Restrict to a window of `limit` cards after skipping `offset`.
    pub fn window(mut self, limit: u64, offset: u64) -> Self {
        self.limit = Some(limit);
        self.offset = offset;
        self
    }
}

/// A window of matching cards together with the total match count.
#[derive(Debug, Clone)]
pub struct CardPage {
    /// Cards in the requested window.
    pub items: Vec<RecipeCard>,
    /// Number of cards matching the query regardless of the window.
    pub total: u64,
}

/// Trim search text; blank becomes `None`.
pub fn normalize_search(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Build an `ILIKE ... ESCAPE '\'` pattern that matches `search` literally
/// as a substring.
pub fn like_pattern(search: &str) -> String {
    let mut escaped = String::with_capacity(search.len() + 2);
    escaped.push('%');
    for ch in search.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_search() {
        assert_eq!(normalize_search(Some("  soup ")), Some("soup".to_string()));
        assert_eq!(normalize_search(Some("   ")), None);
        assert_eq!(normalize_search(None), None);
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("soup"), "%soup%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\"), "%c:\\\\%");
    }

    #[test]
    fn test_feed_sort_maps_to_order() {
        assert_eq!(CardOrder::from(FeedSort::Recent), CardOrder::Newest);
        assert_eq!(CardOrder::from(FeedSort::Popular), CardOrder::MostLiked);
    }
}
