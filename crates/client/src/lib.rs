pub mod api;
pub mod cache;
pub mod config;
pub mod credential;
pub mod forms;
pub mod guard;
pub mod session;
pub mod stats;

pub use api::ApiClient;
pub use cache::{
    CacheEntry, CachedData, CachedResource, CombinedStatus, FetchState, FetchTicket, ResourceCache,
    ResourceKey,
};
pub use session::{Session, SessionState};
