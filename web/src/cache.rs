use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

pub const EVENTS_VIEW: &str = "events";
pub const REGISTRATIONS_VIEW: &str = "registrations";

/// Process-local cache of rendered list views. List handlers fill it;
/// every mutating operation drops both entries so the next read reflects
/// the new counts.
#[derive(Clone, Default)]
pub struct ViewCache {
    views: Arc<RwLock<HashMap<&'static str, Value>>>,
}

impl ViewCache {
    pub async fn get(&self, view: &str) -> Option<Value> {
        self.views.read().await.get(view).cloned()
    }

    pub async fn put(&self, view: &'static str, value: Value) {
        self.views.write().await.insert(view, value);
    }

    /// Marks every view that lists events or registrations stale.
    pub async fn invalidate_listings(&self) {
        let mut views = self.views.write().await;
        views.remove(EVENTS_VIEW);
        views.remove(REGISTRATIONS_VIEW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn starts_empty() {
        let cache = ViewCache::default();
        assert!(cache.get(EVENTS_VIEW).await.is_none());
    }

    #[tokio::test]
    async fn stores_and_returns_a_view() {
        let cache = ViewCache::default();
        cache.put(EVENTS_VIEW, json!([{ "name": "AI Workshop" }])).await;
        assert_eq!(
            cache.get(EVENTS_VIEW).await,
            Some(json!([{ "name": "AI Workshop" }]))
        );
    }

    #[tokio::test]
    async fn invalidation_drops_both_listing_views() {
        let cache = ViewCache::default();
        cache.put(EVENTS_VIEW, json!([])).await;
        cache.put(REGISTRATIONS_VIEW, json!([])).await;

        cache.invalidate_listings().await;

        assert!(cache.get(EVENTS_VIEW).await.is_none());
        assert!(cache.get(REGISTRATIONS_VIEW).await.is_none());
    }
}
