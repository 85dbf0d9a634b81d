use std::sync::Arc;

use rand::Rng;

use crate::catalog::{extract, BodyRecord};
use crate::feed::{FeedCache, FeedClient, FeedError, FeedWindow};
use crate::scene::{build_scene, Scene};

/// Everything one render pass produces: the flat table rows and the
/// render-ready chart description.
#[derive(Debug)]
pub struct RenderOutput {
    pub window: FeedWindow,
    pub records: Vec<BodyRecord>,
    pub scene: Scene,
}

/// One analyst's dashboard session: a feed client plus its memoization
/// cache. Each parameter change re-runs fetch, extract and map in full;
/// nothing persists across invocations beyond the in-memory cache.
pub struct Session {
    client: FeedClient,
    cache: FeedCache,
}

impl Session {
    pub fn new(client: FeedClient) -> Self {
        Self {
            client,
            cache: FeedCache::new(),
        }
    }

    /// Entry point of the pipeline: fetch (or reuse) the window's payload,
    /// flatten it, and derive the visual encoding. A feed failure aborts the
    /// whole pass; it never falls back to stale data from another window.
    pub async fn render<R: Rng>(
        &mut self,
        window: FeedWindow,
        rotation_speed: f64,
        rng: &mut R,
    ) -> Result<RenderOutput, FeedError> {
        let feed = match self.cache.get(&window) {
            Some(feed) => {
                log::debug!(
                    "cache hit for window {} to {}",
                    window.start_date,
                    window.end_date
                );
                feed
            }
            None => {
                let feed = Arc::new(self.client.fetch(&window).await?);
                self.cache.insert(window, Arc::clone(&feed));
                feed
            }
        };

        let records = extract(&feed);
        let scene = build_scene(&records, rotation_speed, rng);

        Ok(RenderOutput {
            window,
            records,
            scene,
        })
    }
}
