//! Keyed cache of server snapshots shared by every view.
//!
//! The cache owns no tasks. A caller asks [`ResourceCache::begin_fetch`] for a
//! ticket, runs the request wherever it likes, and hands the result back to
//! [`ResourceCache::complete`]. At most one ticket per key is outstanding, so
//! concurrent readers of one key share a single request. Invalidating a key
//! bumps its generation; a result carrying an older generation is dropped.

use chrono::{DateTime, Utc};
use shared_types::{AppError, Appointment, DoctorDetail, DoctorSummary, Patient};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Identifies one cached server resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    Patients,
    Doctors,
    Appointments,
    Patient(i64),
    Doctor(i64),
    Appointment(i64),
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKey::Patients => f.write_str("patients"),
            ResourceKey::Doctors => f.write_str("doctors"),
            ResourceKey::Appointments => f.write_str("appointments"),
            ResourceKey::Patient(id) => write!(f, "patient:{id}"),
            ResourceKey::Doctor(id) => write!(f, "doctor:{id}"),
            ResourceKey::Appointment(id) => write!(f, "appointment:{id}"),
        }
    }
}

/// An immutable snapshot. Replaced wholesale on refetch.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedData {
    Patients(Arc<Vec<Patient>>),
    Doctors(Arc<Vec<DoctorSummary>>),
    Appointments(Arc<Vec<Appointment>>),
    Patient(Arc<Patient>),
    Doctor(Arc<DoctorDetail>),
    Appointment(Arc<Appointment>),
}

/// Types that can be read back out of a [`CachedData`].
pub trait CachedResource: Sized {
    fn extract(data: &CachedData) -> Option<Arc<Self>>;
}

macro_rules! cached_resource {
    ($ty:ty, $variant:ident) => {
        impl CachedResource for $ty {
            fn extract(data: &CachedData) -> Option<Arc<Self>> {
                match data {
                    CachedData::$variant(v) => Some(Arc::clone(v)),
                    _ => None,
                }
            }
        }
    };
}

cached_resource!(Vec<Patient>, Patients);
cached_resource!(Vec<DoctorSummary>, Doctors);
cached_resource!(Vec<Appointment>, Appointments);
cached_resource!(Patient, Patient);
cached_resource!(DoctorDetail, Doctor);
cached_resource!(Appointment, Appointment);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheEntry {
    pub data: Option<CachedData>,
    pub error: Option<String>,
    pub loading: bool,
    pub stale: bool,
    pub last_fetched_at: Option<DateTime<Utc>>,
    pub generation: u64,
}

impl CacheEntry {
    /// A request is wanted: nothing in flight, and either nothing settled yet
    /// or the settled value was invalidated.
    fn needs_fetch(&self) -> bool {
        if self.loading {
            return false;
        }
        let settled = self.data.is_some() || self.error.is_some();
        !settled || self.stale
    }
}

/// Permission to run one request for `key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub key: ResourceKey,
    pub generation: u64,
}

/// What a view renders for one key.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Failed(String),
    Ready(Arc<T>),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn ready(&self) -> Option<&Arc<T>> {
        match self {
            FetchState::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Status of a view that needs several keys at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombinedStatus {
    Loading,
    Failed(String),
    Ready,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceCache {
    entries: HashMap<ResourceKey, CacheEntry>,
}

impl ResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self, key: &ResourceKey) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    pub fn needs_fetch(&self, key: &ResourceKey) -> bool {
        self.entries.get(key).map_or(true, CacheEntry::needs_fetch)
    }

    /// Claim the right to fetch `key`. Returns `None` while another request
    /// for it is in flight or its snapshot is still fresh.
    pub fn begin_fetch(&mut self, key: ResourceKey) -> Option<FetchTicket> {
        let entry = self.entries.entry(key).or_default();
        if !entry.needs_fetch() {
            return None;
        }
        entry.loading = true;
        Some(FetchTicket {
            key,
            generation: entry.generation,
        })
    }

    /// Settle a fetch. Returns `false` when the result was dropped because
    /// the key was invalidated after the ticket was issued.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<CachedData, AppError>) -> bool {
        let entry = self.entries.entry(ticket.key).or_default();
        if entry.generation != ticket.generation {
            tracing::debug!(key = %ticket.key, "Dropping result for superseded fetch");
            return false;
        }
        entry.loading = false;
        entry.stale = false;
        entry.last_fetched_at = Some(Utc::now());
        match result {
            Ok(data) => {
                entry.data = Some(data);
                entry.error = None;
            }
            Err(e) => {
                tracing::warn!(key = %ticket.key, error = %e, "Fetch failed");
                entry.error = Some(e.message);
            }
        }
        true
    }

    /// Mark `key` stale so its next read refetches. An in-flight request for
    /// it is superseded.
    pub fn invalidate(&mut self, key: &ResourceKey) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.generation += 1;
            entry.stale = true;
            entry.loading = false;
        }
    }

    pub fn invalidate_where(&mut self, mut pred: impl FnMut(&ResourceKey) -> bool) {
        let keys: Vec<ResourceKey> = self.entries.keys().copied().filter(|k| pred(k)).collect();
        for key in keys {
            self.invalidate(&key);
        }
    }

    /// Forget everything, e.g. on logout.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn state<T: CachedResource>(&self, key: &ResourceKey) -> FetchState<T> {
        let Some(entry) = self.entries.get(key) else {
            return FetchState::Loading;
        };
        if entry.loading && entry.data.is_none() {
            return FetchState::Loading;
        }
        if let Some(msg) = &entry.error {
            if !entry.loading {
                return FetchState::Failed(msg.clone());
            }
        }
        match entry.data.as_ref().and_then(T::extract) {
            Some(v) => FetchState::Ready(v),
            None => FetchState::Loading,
        }
    }

    /// Loading if any key is still pending, otherwise the first failure in
    /// `keys` order, otherwise ready.
    pub fn combined_status(&self, keys: &[ResourceKey]) -> CombinedStatus {
        let mut first_error = None;
        for key in keys {
            match self.entries.get(key) {
                None => return CombinedStatus::Loading,
                Some(entry) if entry.data.is_none() && entry.error.is_none() => {
                    return CombinedStatus::Loading
                }
                Some(entry) if entry.loading && entry.data.is_none() => {
                    return CombinedStatus::Loading
                }
                Some(entry) => {
                    if first_error.is_none() {
                        first_error = entry.error.clone();
                    }
                }
            }
        }
        match first_error {
            Some(msg) => CombinedStatus::Failed(msg),
            None => CombinedStatus::Ready,
        }
    }
}
