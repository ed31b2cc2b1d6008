/// End-of-match verdict.
pub mod outcome;
/// Scoring engine of a single match.
pub mod scoring;
/// Live and finished match sessions.
pub mod session;

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use dashmap::DashMap;
use tokio::sync::{RwLock, watch};
use uuid::Uuid;

use crate::{
    config::AppConfig, dao::match_store::MatchStore, error::ServiceError,
    state::session::LiveMatch,
};

/// Cheaply clonable handle on the application state.
pub type SharedState = Arc<AppState>;

/// Central application state: live match sessions and the storage handle.
pub struct AppState {
    match_store: RwLock<Option<Arc<dyn MatchStore>>>,
    live_matches: DashMap<Uuid, LiveMatch>,
    degraded: watch::Sender<bool>,
    config: Arc<AppConfig>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// The application starts in degraded mode until a storage backend is installed.
    pub fn new(config: AppConfig) -> SharedState {
        let (degraded_tx, _rx) = watch::channel(true);
        Arc::new(Self {
            match_store: RwLock::new(None),
            live_matches: DashMap::new(),
            degraded: degraded_tx,
            config: Arc::new(config),
        })
    }

    /// Runtime configuration.
    pub fn config(&self) -> Arc<AppConfig> {
        self.config.clone()
    }

    /// Obtain a handle to the current match store, if one is installed.
    pub async fn match_store(&self) -> Option<Arc<dyn MatchStore>> {
        let guard = self.match_store.read().await;
        guard.as_ref().cloned()
    }

    /// Obtain the current match store or fail with [`ServiceError::Degraded`].
    pub async fn require_match_store(&self) -> Result<Arc<dyn MatchStore>, ServiceError> {
        if self.is_degraded() {
            return Err(ServiceError::Degraded);
        }
        self.match_store().await.ok_or(ServiceError::Degraded)
    }

    /// Install a new match store implementation and leave degraded mode.
    pub async fn install_match_store(&self, store: Arc<dyn MatchStore>) {
        {
            let mut guard = self.match_store.write().await;
            *guard = Some(store);
        }
        self.update_degraded(false);
    }

    /// Remove the current match store and enter degraded mode.
    pub async fn clear_match_store(&self) {
        {
            let mut guard = self.match_store.write().await;
            guard.take();
        }
        self.update_degraded(true);
    }

    /// Current degraded flag.
    pub fn is_degraded(&self) -> bool {
        *self.degraded.borrow()
    }

    /// Update the degraded flag, returning whether it changed.
    pub fn update_degraded(&self, value: bool) -> bool {
        self.degraded.send_if_modified(|current| {
            if *current == value {
                return false;
            }
            *current = value;
            true
        })
    }

    /// Register a freshly set up match.
    pub fn insert_live_match(&self, live: LiveMatch) {
        self.live_matches.insert(live.id, live);
    }

    /// Number of matches currently being scored.
    pub fn live_match_count(&self) -> usize {
        self.live_matches.len()
    }

    /// Run `f` against the live match `id` owned by `owner`, refreshing its activity.
    ///
    /// Only the entry of that match is locked while `f` runs.
    pub fn with_live_match<F, T>(&self, id: Uuid, owner: &str, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut LiveMatch) -> Result<T, ServiceError>,
    {
        let mut entry = self
            .live_matches
            .get_mut(&id)
            .filter(|entry| entry.owner == owner)
            .ok_or(ServiceError::NoMatchConfigured(id))?;
        let live = entry.value_mut();
        live.last_activity = Instant::now();
        f(live)
    }

    /// Remove the live match `id` owned by `owner` from the registry.
    pub fn take_live_match(&self, id: Uuid, owner: &str) -> Result<LiveMatch, ServiceError> {
        self.live_matches
            .remove_if(&id, |_, live| live.owner == owner)
            .map(|(_, live)| live)
            .ok_or(ServiceError::NoMatchConfigured(id))
    }

    /// Drop every live match idle for at least `idle_ttl` as of `now`.
    ///
    /// Returns how many matches were evicted.
    pub fn evict_idle_matches(&self, now: Instant, idle_ttl: Duration) -> usize {
        let mut evicted = 0;
        self.live_matches.retain(|_, live| {
            let keep = now.saturating_duration_since(live.last_activity) < idle_ttl;
            if !keep {
                evicted += 1;
            }
            keep
        });
        evicted
    }
}
