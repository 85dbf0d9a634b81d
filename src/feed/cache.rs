use std::collections::HashMap;
use std::sync::Arc;

use super::types::NeoFeed;
use super::window::FeedWindow;

/// Per-session memoization of fetched windows, keyed by the exact
/// (start_date, end_date) pair.
///
/// Historical windows are immutable once elapsed, so entries never expire.
/// The current day's window may still gain late observations upstream;
/// caching it for the lifetime of one UI session is accepted.
#[derive(Default)]
pub struct FeedCache {
    entries: HashMap<FeedWindow, Arc<NeoFeed>>,
}

impl FeedCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, window: &FeedWindow) -> Option<Arc<NeoFeed>> {
        self.entries.get(window).cloned()
    }

    pub fn insert(&mut self, window: FeedWindow, feed: Arc<NeoFeed>) {
        self.entries.insert(window, feed);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
