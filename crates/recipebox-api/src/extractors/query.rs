//! Query string parameters for listing endpoints.

use serde::{Deserialize, Serialize};

use recipebox_core::types::FeedSort;
use recipebox_service::feed::FeedRequest;

/// `GET /api/recipes/public?page&q&sort`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedParams {
    /// Page number (1-based, default: 1).
    pub page: Option<i64>,
    /// Search text.
    pub q: Option<String>,
    /// `recent` or `popular`; anything else means `recent`.
    pub sort: Option<String>,
}

impl FeedParams {
    /// Converts to a service feed request.
    pub fn into_request(self) -> FeedRequest {
        FeedRequest {
            page: self.page.unwrap_or(1),
            sort: FeedSort::parse_lenient(self.sort.as_deref()),
            search: self.q,
        }
    }
}

/// `GET /api/recipes/mine?page&q`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MineParams {
    /// Page number (1-based, default: 1).
    pub page: Option<i64>,
    /// Search text.
    pub q: Option<String>,
}

/// `GET /api/recipes/recent?limit` and `/popular?limit`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimitParams {
    /// Number of recipes to return.
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_params_defaults() {
        let req = FeedParams::default().into_request();
        assert_eq!(req.page, 1);
        assert_eq!(req.sort, FeedSort::Recent);
        assert!(req.search.is_none());

        let req = FeedParams {
            page: Some(3),
            q: Some("soup".into()),
            sort: Some("popular".into()),
        }
        .into_request();
        assert_eq!(req.page, 3);
        assert_eq!(req.sort, FeedSort::Popular);
    }
}
