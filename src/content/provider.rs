//! Pluggable asynchronous content providers.
//!
//! A provider is any async operation that yields one [`Item`] or fails.
//! Providers are registered per concrete category; the "all" subject fans
//! out across every registered list in category declaration order. The
//! queue treats a provider failure the same as an item with empty text:
//! excluded from the batch, never propagated.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use super::models::{Category, Item, Subject};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Request(String),

    #[error("provider returned an item with empty text")]
    EmptyText,
}

/// An asynchronous source of one content item.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn fetch(&self) -> Result<Item, ProviderError>;
}

/// Providers registered per category key.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<Category, Vec<Arc<dyn ContentProvider>>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, category: Category, provider: Arc<dyn ContentProvider>) {
        self.providers.entry(category).or_default().push(provider);
    }

    /// Provider list for a subject. `Subject::All` concatenates every
    /// category's list in [`Category::ALL`] order so round-robin assignment
    /// is stable.
    pub fn providers_for(&self, subject: Subject) -> Vec<Arc<dyn ContentProvider>> {
        match subject {
            Subject::Category(category) => {
                self.providers.get(&category).cloned().unwrap_or_default()
            }
            Subject::All => Category::ALL
                .iter()
                .flat_map(|category| self.providers.get(category).into_iter().flatten())
                .cloned()
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.providers.values().all(|list| list.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedProvider(Item);

    #[async_trait]
    impl ContentProvider for CannedProvider {
        async fn fetch(&self) -> Result<Item, ProviderError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_fan_out_order_is_stable() {
        let mut registry = ProviderRegistry::new();
        for category in Category::ALL {
            registry.register(
                category,
                Arc::new(CannedProvider(Item::new("x", category))),
            );
        }

        let providers = registry.providers_for(Subject::All);
        assert_eq!(providers.len(), 5);
        for (provider, category) in providers.iter().zip(Category::ALL) {
            let item = provider.fetch().await.unwrap();
            assert_eq!(item.category, category);
        }
    }

    #[test]
    fn test_unregistered_category_is_empty() {
        let registry = ProviderRegistry::new();
        assert!(registry.is_empty());
        assert!(registry
            .providers_for(Subject::Category(Category::Space))
            .is_empty());
        assert!(registry.providers_for(Subject::All).is_empty());
    }
}
