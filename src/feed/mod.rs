mod cache;
mod client;
mod error;
mod types;
mod window;

pub use cache::FeedCache;
pub use client::{FeedClient, DEFAULT_FEED_TIMEOUT};
pub use error::FeedError;
pub use types::{CloseApproach, NeoEntry, NeoFeed};
pub use window::FeedWindow;
