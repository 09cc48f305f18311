//! Content sourcing: providers, the backlog queue, and the persisted
//! fallback cache.
//!
//! Providers are interchangeable, fallible collaborators; everything that can
//! go wrong with them is absorbed in this module. The rest of the crate only
//! ever observes "fewer items than requested".

pub mod cache;
pub mod models;
pub mod provider;
pub mod queue;

pub use cache::{CacheError, CacheStore, CACHE_CAP};
pub use models::{seed_items, seeds_for, Category, Item, Subject};
pub use provider::{ContentProvider, ProviderError, ProviderRegistry};
pub use queue::ContentQueue;
