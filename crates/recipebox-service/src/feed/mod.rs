//! Recipe listings: the public feed, recent and popular lists, the
//! caller's own recipes, favorites, and the public detail view.

pub mod service;

pub use service::{FeedRequest, FeedService};
