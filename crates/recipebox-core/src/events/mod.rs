//! Revalidation events emitted after successful mutations.
//!
//! Every mutation that changes what a view renders publishes one event
//! naming the views to refresh. Consumers include the feed cache and
//! anything subscribed to the revalidation bus.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rendered view whose data may be stale after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// The caller's own recipe dashboard.
    Dashboard,
    /// The public feed.
    PublicFeed,
    /// The caller's favorites list.
    Favorites,
    /// The category catalog.
    Categories,
    /// A single recipe detail page.
    RecipeDetail,
}

/// The mutation that caused a revalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeEventKind {
    /// A recipe was created.
    Created,
    /// A recipe's fields were edited.
    Updated,
    /// A recipe was deleted.
    Deleted,
    /// A recipe changed between public and private.
    VisibilityChanged,
    /// A favorite was added or removed.
    FavoriteToggled,
    /// A like was added or removed.
    LikeToggled,
    /// A category was created.
    CategoryCreated,
}

/// Notification that one or more views must be refreshed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevalidationEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the mutation completed.
    pub timestamp: DateTime<Utc>,
    /// The user who performed the mutation.
    pub actor_id: Uuid,
    /// The affected recipe, if any.
    pub recipe_id: Option<Uuid>,
    /// What happened.
    pub kind: RecipeEventKind,
    /// The views to refresh.
    pub views: Vec<View>,
}

impl RevalidationEvent {
    /// Create an event stamped with the current time.
    pub fn new(
        actor_id: Uuid,
        recipe_id: Option<Uuid>,
        kind: RecipeEventKind,
        views: Vec<View>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            actor_id,
            recipe_id,
            kind,
            views,
        }
    }

    /// Whether the event names `view` among the views to refresh.
    pub fn touches(&self, view: View) -> bool {
        self.views.contains(&view)
    }
}
