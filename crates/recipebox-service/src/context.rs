//! Request context carrying the resolved caller identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use recipebox_core::error::AppError;

/// Context for the current request.
///
/// Built by the HTTP layer from the session token and passed into service
/// methods so that every operation knows *who* is acting, if anyone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The caller's user ID, or `None` for an anonymous request.
    pub user_id: Option<Uuid>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context for a caller who may or may not be signed in.
    pub fn new(user_id: Option<Uuid>) -> Self {
        Self {
            user_id,
            request_time: Utc::now(),
        }
    }

    /// Creates a context for a signed-in caller.
    pub fn authenticated(user_id: Uuid) -> Self {
        Self::new(Some(user_id))
    }

    /// Creates a context for an anonymous caller.
    pub fn anonymous() -> Self {
        Self::new(None)
    }

    /// Returns the caller's ID or fails with `Unauthenticated`.
    pub fn require_user(&self) -> Result<Uuid, AppError> {
        self.user_id
            .ok_or_else(|| AppError::unauthenticated("Sign in required"))
    }

    /// The viewer used for per-user overlays.
    pub fn viewer(&self) -> Option<Uuid> {
        self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebox_core::error::ErrorKind;

    #[test]
    fn test_require_user() {
        let id = Uuid::new_v4();
        assert_eq!(RequestContext::authenticated(id).require_user().unwrap(), id);

        let err = RequestContext::anonymous().require_user().unwrap_err();
        assert!(err.is(ErrorKind::Unauthenticated));
    }
}
