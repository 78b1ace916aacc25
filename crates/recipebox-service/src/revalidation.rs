//! Post-mutation side effects: feed cache invalidation and revalidation events.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, warn};
use uuid::Uuid;

use recipebox_cache::CacheManager;
use recipebox_cache::keys::PUBLIC_FEED_TAG;
use recipebox_core::events::{RecipeEventKind, RevalidationEvent, View};
use recipebox_core::traits::cache::CacheProvider;

/// In-process broadcast channel of [`RevalidationEvent`]s.
#[derive(Debug, Clone)]
pub struct RevalidationBus {
    sender: broadcast::Sender<RevalidationEvent>,
}

impl RevalidationBus {
    /// Creates a bus that buffers up to `capacity` events per slow subscriber.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribes to future events.
    pub fn subscribe(&self) -> broadcast::Receiver<RevalidationEvent> {
        self.sender.subscribe()
    }

    /// Publishes an event. Returns the number of subscribers that received it.
    pub fn publish(&self, event: RevalidationEvent) -> usize {
        match self.sender.send(event) {
            Ok(receivers) => receivers,
            Err(_) => {
                debug!("No revalidation subscribers");
                0
            }
        }
    }
}

impl Default for RevalidationBus {
    fn default() -> Self {
        Self::new(256)
    }
}

/// Runs the side effects every successful mutation shares.
#[derive(Debug, Clone)]
pub struct Revalidator {
    cache: Arc<CacheManager>,
    bus: RevalidationBus,
}

impl Revalidator {
    /// Creates a new revalidator.
    pub fn new(cache: Arc<CacheManager>, bus: RevalidationBus) -> Self {
        Self { cache, bus }
    }

    /// The underlying bus.
    pub fn bus(&self) -> &RevalidationBus {
        &self.bus
    }

    /// Invalidates the public feed tag and publishes an event naming `views`.
    ///
    /// A cache failure is logged and does not fail the mutation; staleness
    /// is then bounded by the feed TTL.
    pub async fn after_mutation(
        &self,
        actor_id: Uuid,
        recipe_id: Option<Uuid>,
        kind: RecipeEventKind,
        views: Vec<View>,
    ) {
        match self.cache.invalidate_tag(PUBLIC_FEED_TAG).await {
            Ok(count) => debug!(tag = PUBLIC_FEED_TAG, count, "Invalidated feed cache"),
            Err(e) => warn!(tag = PUBLIC_FEED_TAG, error = %e, "Failed to invalidate feed cache"),
        }

        let event = RevalidationEvent::new(actor_id, recipe_id, kind, views);
        self.bus.publish(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebox_cache::memory::MemoryCacheProvider;
    use recipebox_core::config::cache::MemoryCacheConfig;
    use std::time::Duration;

    #[tokio::test]
    async fn test_after_mutation_invalidates_and_publishes() {
        let provider = MemoryCacheProvider::new(&MemoryCacheConfig::default());
        let cache = Arc::new(CacheManager::from_provider(Arc::new(provider)));
        cache
            .set_tagged("feed", "[]", Duration::from_secs(60), &[PUBLIC_FEED_TAG])
            .await
            .unwrap();

        let bus = RevalidationBus::new(8);
        let mut rx = bus.subscribe();
        let revalidator = Revalidator::new(cache.clone(), bus);

        let actor = Uuid::new_v4();
        revalidator
            .after_mutation(actor, None, RecipeEventKind::Created, vec![View::PublicFeed])
            .await;

        assert_eq!(cache.get("feed").await.unwrap(), None);
        let event = rx.recv().await.unwrap();
        assert_eq!(event.actor_id, actor);
        assert!(event.touches(View::PublicFeed));
    }

    #[test]
    fn test_publish_without_subscribers() {
        let bus = RevalidationBus::new(4);
        let event = RevalidationEvent::new(
            Uuid::new_v4(),
            None,
            RecipeEventKind::CategoryCreated,
            vec![View::Categories],
        );
        assert_eq!(bus.publish(event), 0);
    }
}
