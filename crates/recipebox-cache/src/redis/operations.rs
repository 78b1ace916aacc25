//! Redis cache provider implementation.
//!
//! Tags are Redis sets holding the full keys stored under them. A tag set
//! is given the TTL of the most recent entry written under it, so it never
//! outlives the entries by more than one write.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::debug;

use recipebox_core::error::{AppError, ErrorKind};
use recipebox_core::result::AppResult;
use recipebox_core::traits::cache::CacheProvider;

use super::client::RedisClient;
use crate::keys;

/// Redis-backed cache provider.
#[derive(Debug, Clone)]
pub struct RedisCacheProvider {
    /// Redis client.
    client: RedisClient,
}

impl RedisCacheProvider {
    /// Create a new Redis cache provider.
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Map a Redis error to an AppError.
    fn map_err(e: redis::RedisError) -> AppError {
        AppError::with_source(ErrorKind::Cache, format!("Redis error: {e}"), e)
    }
}

/// Redis rejects `EX 0`; sub-second TTLs round up to one second.
fn ttl_seconds(ttl: Duration) -> u64 {
    ttl.as_secs().max(1)
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let result: Option<String> = conn.get(&full_key).await.map_err(Self::map_err)?;
        Ok(result)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let _: () = conn
            .set_ex(&full_key, value, ttl_seconds(ttl))
            .await
            .map_err(Self::map_err)?;
        Ok(())
    }

    async fn set_tagged(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
        tags: &[&str],
    ) -> AppResult<()> {
        let full_key = self.client.prefixed_key(key);
        let seconds = ttl_seconds(ttl);
        let mut pipe = redis::pipe();
        pipe.atomic().set_ex(&full_key, value, seconds).ignore();
        for tag in tags {
            let tag_key = self.client.prefixed_key(&keys::tag_members(tag));
            pipe.sadd(&tag_key, &full_key)
                .ignore()
                .expire(&tag_key, seconds as i64)
                .ignore();
        }

        let mut conn = self.client.conn_mut();
        let _: () = pipe.query_async(&mut conn).await.map_err(Self::map_err)?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let _: () = conn.del(&full_key).await.map_err(Self::map_err)?;
        Ok(())
    }

    async fn invalidate_tag(&self, tag: &str) -> AppResult<u64> {
        let tag_key = self.client.prefixed_key(&keys::tag_members(tag));
        let mut conn = self.client.conn_mut();

        let members: Vec<String> = conn.smembers(&tag_key).await.map_err(Self::map_err)?;
        let _: () = conn.del(&tag_key).await.map_err(Self::map_err)?;
        if members.is_empty() {
            return Ok(0);
        }

        let count: u64 = conn.del(&members).await.map_err(Self::map_err)?;
        debug!(tag, count, "Invalidated tagged cache entries");
        Ok(count)
    }

    async fn health_check(&self) -> AppResult<bool> {
        let mut conn = self.client.conn_mut();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(Self::map_err)?;
        Ok(pong == "PONG")
    }
}
