//! Request timeout layer.

use std::time::Duration;

use tower_http::timeout::TimeoutLayer;

use recipebox_core::config::app::ServerConfig;

/// Builds a layer that aborts requests running longer than the configured timeout.
pub fn build_timeout_layer(config: &ServerConfig) -> TimeoutLayer {
    TimeoutLayer::new(Duration::from_secs(config.request_timeout_seconds.max(1)))
}
