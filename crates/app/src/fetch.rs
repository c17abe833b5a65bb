use client::{CachedResource, FetchState, ResourceCache, ResourceKey};
use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::auth::use_api;

pub fn use_cache() -> Signal<ResourceCache> {
    use_context::<Signal<ResourceCache>>()
}

/// Read `key` from the shared cache, starting a request when the entry is
/// missing or has been invalidated.
///
/// The request runs on an app-lifetime task and writes only to the cache, so
/// a view that unmounts mid-flight leaves nothing behind. Readers of the same
/// key share one request.
pub fn use_cached<T: CachedResource + 'static>(key: ResourceKey) -> FetchState<T> {
    let mut cache = use_cache();
    let api = use_api();

    use_effect(use_reactive!(|key| {
        if !cache.read().needs_fetch(&key) {
            return;
        }
        let Some(ticket) = cache.write().begin_fetch(key) else {
            return;
        };
        let api = api.clone();
        spawn_forever(async move {
            let result = api.fetch(&ticket.key).await;
            if !cache.write().complete(ticket, result) {
                tracing::debug!(key = %ticket.key, "Discarded result for invalidated key");
            }
        });
    }));

    let state = cache.read().state::<T>(&key);
    state
}

/// Mark `keys` stale so every mounted reader refetches.
pub fn invalidate(mut cache: Signal<ResourceCache>, keys: &[ResourceKey]) {
    let mut entries = cache.write();
    for key in keys {
        entries.invalidate(key);
    }
}
