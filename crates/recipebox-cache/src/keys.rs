//! Cache key builders for all RecipeBox cache entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses. Backend prefixes (such as the
//! Redis `key_prefix`) are applied by the provider, not here.

use uuid::Uuid;

use recipebox_core::types::FeedSort;

/// Tag shared by every cached view of public recipes.
pub const PUBLIC_FEED_TAG: &str = "recipes:public";

// ── Feed keys ──────────────────────────────────────────────

/// Cache key for one page of the public feed as seen by `viewer`.
pub fn public_feed(viewer: Option<Uuid>, sort: FeedSort, page: u64, search: Option<&str>) -> String {
    let viewer = viewer.map_or_else(|| "anon".to_string(), |id| id.to_string());
    let search = search.unwrap_or_default();
    format!("feed:public:{viewer}:{sort}:p{page}:{search}")
}

/// Cache key for the recent or popular list as seen by `viewer`.
pub fn public_list(viewer: Option<Uuid>, sort: FeedSort, limit: i64) -> String {
    let viewer = viewer.map_or_else(|| "anon".to_string(), |id| id.to_string());
    format!("list:public:{viewer}:{sort}:n{limit}")
}

// ── Tag keys ───────────────────────────────────────────────

/// Key of the set holding every key stored under `tag`.
pub fn tag_members(tag: &str) -> String {
    format!("tag:{tag}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_feed_key() {
        assert_eq!(
            public_feed(None, FeedSort::Recent, 1, None),
            "feed:public:anon:recent:p1:"
        );
        let id = Uuid::nil();
        assert_eq!(
            public_feed(Some(id), FeedSort::Popular, 3, Some("soup")),
            "feed:public:00000000-0000-0000-0000-000000000000:popular:p3:soup"
        );
    }

    #[test]
    fn test_public_list_key() {
        assert_eq!(
            public_list(None, FeedSort::Popular, 6),
            "list:public:anon:popular:n6"
        );
    }

    #[test]
    fn test_tag_members_key() {
        assert_eq!(tag_members(PUBLIC_FEED_TAG), "tag:recipes:public");
    }
}
