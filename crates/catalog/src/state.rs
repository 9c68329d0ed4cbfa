//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It holds one repository trait object per collection;
//! the concrete backend is chosen at compile time via feature flags.

use std::sync::Arc;

use catalog_core::storage::{InventoryRepository, ProductRepository, ReviewRepository};

use crate::config::Config;

/// Shared application state.
///
/// This is cloned for each request handler. All three repositories usually
/// point at the same store instance, created once at startup.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
    pub inventory: Arc<dyn InventoryRepository>,
}

impl AppState {
    /// Creates a new AppState from one repository per collection.
    pub fn build(
        products: Arc<dyn ProductRepository>,
        reviews: Arc<dyn ReviewRepository>,
        inventory: Arc<dyn InventoryRepository>,
    ) -> Self {
        Self {
            products,
            reviews,
            inventory,
        }
    }

    /// Creates a new AppState backed by a single store serving all collections.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: ProductRepository + ReviewRepository + InventoryRepository + 'static,
    {
        Self::build(store.clone(), store.clone(), store)
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::mock_data;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for development and testing without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let mut repo = InMemoryRepository::new();
            if let Some(page_size) = config.scan_page_size {
                repo = repo.with_page_size(page_size);
            }

            if config.seed_demo_data {
                mock_data::seed(&repo).await;
                tracing::info!("Seeded in-memory store with demo catalog");
            }

            Ok(Self::from_store(Arc::new(repo)))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use super::*;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = DynamoDbRepository::from_config(config).await;

            tracing::info!(
                products = %config.products_table,
                reviews = %config.reviews_table,
                inventory = %config.inventory_table,
                region = %config.aws_region,
                "Using DynamoDB storage"
            );

            Ok(Self::from_store(Arc::new(repo)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryRepository;
    use catalog_core::catalog::Product;

    #[tokio::test]
    async fn test_from_store_shares_one_instance() {
        let repo = Arc::new(InMemoryRepository::new());
        repo.insert_product(Product::new("p-1")).await;

        let state = AppState::from_store(repo);

        assert!(state.products.get_product("p-1").await.unwrap().is_some());
        assert!(state.reviews.query_reviews("p-1").await.unwrap().is_empty());
        assert!(state.inventory.get_inventory("p-1").await.unwrap().is_none());
    }

    #[cfg(feature = "inmemory")]
    #[tokio::test]
    async fn test_new_seeds_demo_data() {
        let config = Config {
            products_table: "products".to_string(),
            reviews_table: "reviews".to_string(),
            inventory_table: "inventory".to_string(),
            category_index: "category-index".to_string(),
            aws_region: "eu-west-2".to_string(),
            scan_page_size: Some(3),
            seed_demo_data: true,
        };

        let state = AppState::new(&config).await.unwrap();

        assert!(state.products.get_product("prod-001").await.unwrap().is_some());
    }
}
