//! In-memory content backlog with timed, fallback-aware replenishment.
//!
//! The queue is the FIFO boundary between asynchronous batch fetches and the
//! deck consumer. Priming races one small fetch against a short deadline and
//! falls back to the persisted cache, then to the built-in seed set, so the
//! deck is never left empty while any source exists. Background refills are
//! single-flight.
//!
//! Provider failures and timeouts are absorbed here; callers only ever see
//! "fewer items than requested".

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures_util::future::join_all;
use tokio::time::timeout;

use super::cache::CacheStore;
use super::models::{seeds_for, Item, Subject};
use super::provider::ProviderRegistry;
use crate::VISIBLE;

/// Deadline for the instant-paint priming fetch.
const PRIME_TIMEOUT: Duration = Duration::from_millis(1200);

/// Deadline for a single provider call inside a batch. A call that loses the
/// race is dropped, not merely ignored.
const PROVIDER_TIMEOUT: Duration = Duration::from_millis(3500);

/// Shared handle over the backlog of fetched-but-not-yet-displayed items.
#[derive(Clone)]
pub struct ContentQueue {
    registry: Arc<ProviderRegistry>,
    cache: Arc<CacheStore>,
    backlog: Arc<Mutex<VecDeque<Item>>>,
    fetching: Arc<AtomicBool>,
    prime_timeout: Duration,
    provider_timeout: Duration,
}

impl ContentQueue {
    pub fn new(registry: ProviderRegistry, cache: CacheStore) -> Self {
        Self {
            registry: Arc::new(registry),
            cache: Arc::new(cache),
            backlog: Arc::new(Mutex::new(VecDeque::new())),
            fetching: Arc::new(AtomicBool::new(false)),
            prime_timeout: PRIME_TIMEOUT,
            provider_timeout: PROVIDER_TIMEOUT,
        }
    }

    /// Override the priming and per-provider deadlines.
    pub fn with_timeouts(mut self, prime: Duration, provider: Duration) -> Self {
        self.prime_timeout = prime;
        self.provider_timeout = provider;
        self
    }

    pub fn len(&self) -> usize {
        self.backlog.lock().map(|q| q.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the item at the head of the backlog.
    pub fn pop(&self) -> Option<Item> {
        self.backlog.lock().ok().and_then(|mut q| q.pop_front())
    }

    pub fn clear(&self) {
        if let Ok(mut backlog) = self.backlog.lock() {
            backlog.clear();
        }
    }

    pub(crate) fn push(&self, items: Vec<Item>) {
        if let Ok(mut backlog) = self.backlog.lock() {
            backlog.extend(items);
        }
    }

    /// The subject persisted by the previous session.
    pub fn last_subject(&self) -> Subject {
        self.cache.last_subject()
    }

    /// Persist the current subject selection, best-effort.
    pub fn remember_subject(&self, subject: Subject) {
        self.cache.set_last_subject(subject);
    }

    /// Populate the backlog quickly at startup or after a subject switch:
    /// one deadline-bounded fetch sized to the visible window, then the
    /// persisted cache, then the seed set. After this returns the backlog
    /// holds at least `min(VISIBLE, available-from-any-source)` items.
    pub async fn prime_instant(&self, subject: Subject) {
        match timeout(self.prime_timeout, self.fetch_batch(subject, VISIBLE)).await {
            Ok(batch) if !batch.is_empty() => {
                let mut batch = batch;
                batch.truncate(VISIBLE);
                self.push(batch);
                return;
            }
            Ok(_) => log::debug!("instant fetch for '{}' came back empty", subject.key()),
            Err(_) => log::debug!("instant fetch for '{}' timed out", subject.key()),
        }

        let mut cached = match subject.category() {
            Some(category) => self.cache.load(category),
            None => Vec::new(),
        };
        cached.truncate(VISIBLE);
        if !cached.is_empty() {
            log::info!("priming '{}' from cache", subject.key());
            self.push(cached);
        } else {
            log::info!("priming '{}' from seed data", subject.key());
            self.push(seeds_for(subject));
        }
    }

    /// Run `count` provider calls for a subject, assigned round-robin across
    /// the resolved provider list, each bounded by the provider deadline.
    /// Returns whichever subset settled successfully with non-empty text;
    /// on a concrete subject the results are also appended to its cache.
    pub async fn fetch_batch(&self, subject: Subject, count: usize) -> Vec<Item> {
        let providers = self.registry.providers_for(subject);
        if providers.is_empty() {
            return Vec::new();
        }

        let calls = (0..count).map(|i| {
            let provider = Arc::clone(&providers[i % providers.len()]);
            let deadline = self.provider_timeout;
            async move { timeout(deadline, provider.fetch()).await }
        });

        let mut out = Vec::new();
        for settled in join_all(calls).await {
            match settled {
                Ok(Ok(item)) if !item.text.is_empty() => out.push(item),
                Ok(Ok(_)) => log::debug!("dropping item with empty text"),
                Ok(Err(e)) => log::debug!("provider call failed: {}", e),
                Err(_) => log::debug!("provider call exceeded {:?}", self.provider_timeout),
            }
        }

        if let Some(category) = subject.category() {
            if !out.is_empty() {
                self.cache.append(category, &out);
            }
        }
        out
    }

    /// Background batch fetch appended to the backlog on completion.
    /// Single-flight: a call while another fill is running is a no-op.
    pub async fn fill_queue(&self, subject: Subject, count: usize) {
        if self.fetching.swap(true, Ordering::SeqCst) {
            return;
        }
        let batch = self.fetch_batch(subject, count).await;
        log::debug!(
            "background fill for '{}' fetched {} item(s)",
            subject.key(),
            batch.len()
        );
        self.push(batch);
        self.fetching.store(false, Ordering::SeqCst);
    }
}
