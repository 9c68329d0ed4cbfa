//! In-crate fakes for exercising the listing pipeline.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Barrier;

use crate::storage::{
    ContinuationToken, InventoryRepository, Page, PriceCeiling, ProductRepository, Result,
    ReviewRepository, StoreError,
};

use super::{InventoryRecord, Product, ProductUpdate, Review};

/// Products served in a fixed order, `page_size` items per scan page.
pub(crate) struct FakeProducts {
    items: Vec<Product>,
    page_size: usize,
    scans: AtomicUsize,
    queries: AtomicUsize,
    failure: Option<(usize, StoreError)>,
}

impl FakeProducts {
    pub(crate) fn new(items: impl IntoIterator<Item = Product>, page_size: usize) -> Self {
        Self {
            items: items.into_iter().collect(),
            page_size,
            scans: AtomicUsize::new(0),
            queries: AtomicUsize::new(0),
            failure: None,
        }
    }

    /// Makes the `page`-th scan call (1-based) fail with `error`.
    pub(crate) fn failing_on_page(mut self, page: usize, error: StoreError) -> Self {
        self.failure = Some((page, error));
        self
    }

    pub(crate) fn scan_calls(&self) -> usize {
        self.scans.load(Ordering::SeqCst)
    }

    pub(crate) fn query_calls(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

fn passes(max_price: Option<PriceCeiling>, product: &Product) -> bool {
    max_price.is_none_or(|ceiling| ceiling.admits(product.price))
}

#[async_trait]
impl ProductRepository for FakeProducts {
    async fn get_product(&self, product_id: &str) -> Result<Option<Product>> {
        Ok(self
            .items
            .iter()
            .find(|p| p.product_id == product_id)
            .cloned())
    }

    async fn query_products_by_category(
        &self,
        category: &str,
        max_price: Option<PriceCeiling>,
        limit: Option<usize>,
    ) -> Result<Vec<Product>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .items
            .iter()
            .filter(|p| p.category.as_deref() == Some(category))
            .filter(|p| passes(max_price, p))
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn scan_products(
        &self,
        max_price: Option<PriceCeiling>,
        start: Option<ContinuationToken>,
    ) -> Result<Page<Product>> {
        let call = self.scans.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some((page, error)) = &self.failure {
            if *page == call {
                return Err(error.clone());
            }
        }

        let offset = match start {
            Some(token) => token
                .as_str()
                .parse::<usize>()
                .map_err(|e| StoreError::InvalidData(e.to_string()))?,
            None => 0,
        };
        let end = (offset + self.page_size).min(self.items.len());
        let items = self.items[offset..end]
            .iter()
            .filter(|p| passes(max_price, p))
            .cloned()
            .collect();
        let next = (end < self.items.len()).then(|| ContinuationToken::new(end.to_string()));

        Ok(Page::new(items, next))
    }

    async fn update_product(
        &self,
        _product_id: &str,
        _update: &ProductUpdate,
    ) -> Result<Option<Product>> {
        Ok(None)
    }
}

/// Inventory and review lookups with per-product failure injection.
#[derive(Default)]
pub(crate) struct FakeLookups {
    inventory: HashMap<String, InventoryRecord>,
    reviews: HashMap<String, Vec<Review>>,
    failing_inventory: HashSet<String>,
    failing_reviews: HashSet<String>,
    barrier: Option<Barrier>,
    calls: AtomicUsize,
}

impl FakeLookups {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_inventory(mut self, record: InventoryRecord) -> Self {
        self.inventory.insert(record.product_id.clone(), record);
        self
    }

    pub(crate) fn with_review(mut self, review: Review) -> Self {
        self.reviews
            .entry(review.product_id.clone())
            .or_default()
            .push(review);
        self
    }

    pub(crate) fn failing_inventory(mut self, product_id: &str) -> Self {
        self.failing_inventory.insert(product_id.to_string());
        self
    }

    pub(crate) fn failing_reviews(mut self, product_id: &str) -> Self {
        self.failing_reviews.insert(product_id.to_string());
        self
    }

    /// Holds every lookup until `lookups` of them are in flight at once.
    pub(crate) fn gated(mut self, lookups: usize) -> Self {
        self.barrier = Some(Barrier::new(lookups));
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn enter(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
    }
}

#[async_trait]
impl InventoryRepository for FakeLookups {
    async fn get_inventory(&self, product_id: &str) -> Result<Option<InventoryRecord>> {
        self.enter().await;
        if self.failing_inventory.contains(product_id) {
            return Err(StoreError::service(
                "ProvisionedThroughputExceededException",
                format!("inventory lookup for {product_id} throttled"),
            ));
        }
        Ok(self.inventory.get(product_id).cloned())
    }

    async fn query_inventory(&self, product_id: &str) -> Result<Vec<InventoryRecord>> {
        Ok(self.get_inventory(product_id).await?.into_iter().collect())
    }
}

#[async_trait]
impl ReviewRepository for FakeLookups {
    async fn query_reviews(&self, product_id: &str) -> Result<Vec<Review>> {
        self.enter().await;
        if self.failing_reviews.contains(product_id) {
            return Err(StoreError::ConnectionFailed(format!(
                "reviews lookup for {product_id} timed out"
            )));
        }
        Ok(self.reviews.get(product_id).cloned().unwrap_or_default())
    }
}
